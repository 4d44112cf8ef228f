//! User data repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::user::{CreateUserParam, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user row.
    ///
    /// The username column carries a unique constraint; inserting a duplicate
    /// fails with a unique-violation `DbErr` and leaves no side effects. The
    /// caller distinguishes that case via `DbErr::sql_err()`.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its generated id
    /// - `Err(DbErr)` - Unique violation or other database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user row by username, including the stored credential hash.
    ///
    /// Returns the raw entity model because this is the one read that needs
    /// `password_hash`; callers verifying credentials map to the domain model
    /// themselves after verification.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
