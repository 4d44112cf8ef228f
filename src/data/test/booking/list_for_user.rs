use super::*;

/// Tests listing returns only the owner's bookings, newest first.
///
/// Expected: three bookings in descending insertion order, the other
/// user's booking absent
#[tokio::test]
async fn lists_own_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;

    let repo = BookingRepository::new(db);
    repo.create(booking_param(lina.id, "First Hotel")).await?;
    repo.create(booking_param(lina.id, "Second Hotel")).await?;
    repo.create(booking_param(lina.id, "Third Hotel")).await?;
    factory::booking::create_booking(db, omar.id, "omar", "Other Hotel", "Luxor").await?;

    let bookings = repo.list_for_user(lina.id).await?;

    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0].hotel_name, "Third Hotel");
    assert_eq!(bookings[1].hotel_name, "Second Hotel");
    assert_eq!(bookings[2].hotel_name, "First Hotel");
    assert!(bookings.iter().all(|b| b.user_id == lina.id));

    Ok(())
}

/// Tests a user with no bookings gets an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn empty_for_user_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;

    let bookings = BookingRepository::new(db).list_for_user(user.id).await?;

    assert!(bookings.is_empty());

    Ok(())
}
