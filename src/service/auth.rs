//! Credential registration and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use sea_orm::{DatabaseConnection, SqlErr};
use tracing::info;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
};

/// Service for account registration and credential verification.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The password is hashed with argon2 (random salt) before anything
    /// touches storage. A duplicate username surfaces as a distinguishable
    /// conflict, not a generic storage error.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let password_hash = hash_password(password)?;

        let result = UserRepository::new(self.db)
            .create(CreateUserParam {
                username: username.to_string(),
                password_hash,
            })
            .await;

        match result {
            Ok(user) => {
                info!("registered new account '{}'", user.username);
                Ok(user)
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::Conflict("Username already exists.".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Verifies a username/password pair.
    ///
    /// An unknown username and a wrong password both produce
    /// `AuthError::InvalidCredentials`, so the outcome cannot be used to
    /// probe which usernames exist.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched a stored account
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn verify(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(stored) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let parsed = PasswordHash::new(&stored.password_hash)
            .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {}", e)))?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(stored))
    }
}

/// Hashes a password into an argon2 PHC string with a fresh random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?
        .to_string();

    Ok(hash)
}
