//! Type-safe wrapper over the raw session.
//!
//! All authentication state lives under one session key. Handlers go through
//! this wrapper instead of touching `Session` directly, so the key and the
//! stored type stay consistent across the codebase.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication view of the request session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as belonging to the given user.
    ///
    /// Called after successful registration or login.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Id of the logged-in user, or `None` for an anonymous session.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Whether the session carries a logged-in user.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Destroys the session record entirely, invalidating the cookie.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
