use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id in the session; the caller is not logged in.
    ///
    /// Results in a 401 JSON response, never a redirect.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// Credentials did not match a stored account.
    ///
    /// Unknown username and wrong password both map here so the response
    /// cannot be used to enumerate accounts.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The session carries a user id with no matching database row.
    ///
    /// Treated like a missing session; the id is logged for diagnostics.
    #[error("Session user {0} not found in database")]
    UserGone(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants result in 401 Unauthorized. Client-facing messages stay
/// generic; the stale-user case is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password.".to_string(),
                }),
            )
                .into_response(),
            Self::UserGone(user_id) => {
                tracing::debug!("session resolved to missing user {}", user_id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
