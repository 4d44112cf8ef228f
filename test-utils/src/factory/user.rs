use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder hash for tests that do not exercise credential verification.
///
/// Repository and booking tests only need a user row to satisfy foreign keys;
/// tests that verify passwords go through the auth service and hash for real.
pub const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$invalid";

/// Inserts a user row with the given username and a placeholder password hash.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entity::user::Model, DbErr> {
    entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        password_hash: ActiveValue::Set(DUMMY_PASSWORD_HASH.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
