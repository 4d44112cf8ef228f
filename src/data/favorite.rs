//! Favorite data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

use crate::model::favorite::{AddFavoriteParam, Favorite};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a `(user, item)` pair is currently favorited.
    pub async fn is_favorite(&self, user_id: i32, item_name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ItemName.eq(item_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a favorite row, stamping the current time.
    ///
    /// A duplicate insert hits the composite primary key and is treated as
    /// success: the pair is favorited either way, and the original row (with
    /// its original city and timestamp) is kept.
    pub async fn add(&self, param: AddFavoriteParam) -> Result<(), DbErr> {
        let result = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            item_name: ActiveValue::Set(param.item_name),
            city: ActiveValue::Set(param.city),
            added_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Removes a favorite row.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - The pair was not favorited; not an error
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, user_id: i32, item_name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ItemName.eq(item_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists a user's favorites. Order is not part of the contract.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let rows = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Favorite::from_entity).collect())
    }
}
