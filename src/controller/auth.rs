use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::extract::ApiJson,
    data::user::UserRepository,
    error::AppError,
    middleware::session::AuthSession,
    model::{
        api::{ErrorDto, MessageDto},
        user::{CredentialsDto, SessionUserDto, StatusDto},
    },
    service::auth::AuthService,
    state::AppState,
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "Account created", body = MessageDto),
        (status = 400, description = "Missing or blank username/password", body = ErrorDto),
        (status = 409, description = "Username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let username = payload.username.trim();

    if username.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required.".to_string(),
        ));
    }

    AuthService::new(&state.db)
        .register(username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User registered successfully.".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = SessionUserDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .verify(payload.username.trim(), &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session destroyed", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if !auth_session.is_authenticated().await? {
        return Err(crate::error::auth::AuthError::NotAuthenticated.into());
    }

    auth_session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully.".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session state", body = StatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Ok(Json(StatusDto::anonymous()));
    };

    // A session naming a deleted user reads as anonymous rather than an error.
    let status = match UserRepository::new(&state.db).find_by_id(user_id).await? {
        Some(user) => StatusDto::authenticated(user),
        None => StatusDto::anonymous(),
    };

    Ok(Json(status))
}
