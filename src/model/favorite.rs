//! Favorite domain model and toggle DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Favorite membership for a `(user, item)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub user_id: i32,
    pub item_name: String,
    pub city: String,
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_entity(entity: entity::favorite::Model) -> Self {
        Self {
            user_id: entity.user_id,
            item_name: entity.item_name,
            city: entity.city,
            added_at: entity.added_at,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            item_name: self.item_name,
            city: self.city,
        }
    }
}

/// Parameters for inserting a favorite row.
#[derive(Debug, Clone)]
pub struct AddFavoriteParam {
    pub user_id: i32,
    pub item_name: String,
    pub city: String,
}

/// Favorite as returned by the list endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FavoriteDto {
    pub item_name: String,
    pub city: String,
}

/// Request body for `POST /api/favorites/toggle`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ToggleFavoriteDto {
    pub item_name: String,
    pub city: String,
}

/// Response for a favorite toggle, reporting the resulting state.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ToggleResultDto {
    pub is_favorite: bool,
    pub message: String,
}
