use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests the owner can delete their own booking.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn owner_deletes_own_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;
    let seeded =
        factory::booking::create_booking(db, user.id, "lina", "Nile View Hotel", "Cairo").await?;

    let deleted = BookingRepository::new(db)
        .delete_owned(seeded.id, user.id)
        .await?;

    assert!(deleted);

    let remaining = entity::prelude::Booking::find_by_id(seeded.id)
        .one(db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting another user's booking does nothing.
///
/// Expected: Ok(false) and the row intact
#[tokio::test]
async fn foreign_delete_leaves_row_intact() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;
    let foreign =
        factory::booking::create_booking(db, omar.id, "omar", "Other Hotel", "Luxor").await?;

    let deleted = BookingRepository::new(db)
        .delete_owned(foreign.id, lina.id)
        .await?;

    assert!(!deleted);

    let remaining = entity::prelude::Booking::find_by_id(foreign.id)
        .one(db)
        .await?;
    assert!(remaining.is_some());

    Ok(())
}

/// Tests deleting a missing id reports false, not an error.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_id_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;
    factory::booking::create_booking(db, user.id, "lina", "Nile View Hotel", "Cairo").await?;

    let deleted = BookingRepository::new(db).delete_owned(9999, user.id).await?;

    assert!(!deleted);

    let count = entity::prelude::Booking::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
