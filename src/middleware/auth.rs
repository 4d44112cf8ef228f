//! Per-request authentication guard.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the request session to a live user account.
///
/// Every protected handler calls `require` first; the returned user is the
/// only source of owner identity for downstream queries.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user backed by a database row.
    ///
    /// A session pointing at a deleted account is treated the same as no
    /// session at all from the client's point of view (401), but the variants
    /// are distinct so the server can log the difference.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - No user in session
    /// - `Err(AppError::AuthErr(UserGone))` - Session user no longer exists
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserGone(user_id).into());
        };

        Ok(user)
    }
}
