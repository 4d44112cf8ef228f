use super::*;

/// Tests the owner can fetch their own booking.
///
/// Expected: Ok(Some(Booking)) with matching fields
#[tokio::test]
async fn owner_finds_own_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;
    let seeded =
        factory::booking::create_booking(db, user.id, "lina", "Nile View Hotel", "Cairo").await?;

    let found = BookingRepository::new(db)
        .find_owned(seeded.id, user.id)
        .await?;

    let booking = found.unwrap();
    assert_eq!(booking.id, seeded.id);
    assert_eq!(booking.hotel_name, "Nile View Hotel");

    Ok(())
}

/// Tests a foreign booking and a missing id produce the same outcome.
///
/// Expected: Ok(None) for both, indistinguishable to the caller
#[tokio::test]
async fn foreign_and_missing_look_identical() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;
    let foreign =
        factory::booking::create_booking(db, omar.id, "omar", "Other Hotel", "Luxor").await?;

    let repo = BookingRepository::new(db);
    let foreign_result = repo.find_owned(foreign.id, lina.id).await?;
    let missing_result = repo.find_owned(9999, lina.id).await?;

    assert_eq!(foreign_result, missing_result);
    assert!(foreign_result.is_none());

    Ok(())
}
