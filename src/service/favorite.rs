//! Favorite toggle logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::favorite::FavoriteRepository,
    error::AppError,
    model::favorite::{AddFavoriteParam, Favorite},
};

/// Service providing business logic for the favorites list.
pub struct FavoriteService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Flips the favorite state for a `(user, item)` pair.
    ///
    /// Each call inverts the current state; calling twice returns to the
    /// original state. The city is only recorded when the pair becomes a
    /// favorite.
    ///
    /// # Returns
    /// - `Ok(true)` - The item is now a favorite
    /// - `Ok(false)` - The item is no longer a favorite
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn toggle(
        &self,
        user_id: i32,
        item_name: String,
        city: String,
    ) -> Result<bool, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if repo.is_favorite(user_id, &item_name).await? {
            repo.remove(user_id, &item_name).await?;
            Ok(false)
        } else {
            repo.add(AddFavoriteParam {
                user_id,
                item_name,
                city,
            })
            .await?;
            Ok(true)
        }
    }

    /// Lists the user's favorites.
    pub async fn list(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        Ok(FavoriteRepository::new(self.db).list_for_user(user_id).await?)
    }
}
