use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a booking row for the given owner with fixed dates and price.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    user_name: &str,
    hotel_name: &str,
    city: &str,
) -> Result<entity::booking::Model, DbErr> {
    entity::booking::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        user_name: ActiveValue::Set(user_name.to_string()),
        hotel_name: ActiveValue::Set(hotel_name.to_string()),
        city: ActiveValue::Set(city.to_string()),
        check_in: ActiveValue::Set("2026-03-01".to_string()),
        check_out: ActiveValue::Set("2026-03-05".to_string()),
        price: ActiveValue::Set(450.0),
        hotel_image_url: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
