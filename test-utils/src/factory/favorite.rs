use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite row for the given user and item.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    item_name: &str,
    city: &str,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        item_name: ActiveValue::Set(item_name.to_string()),
        city: ActiveValue::Set(city.to_string()),
        added_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
