use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests removing an existing favorite.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn removes_existing_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;
    factory::favorite::create_favorite(db, user.id, "Nile View Hotel", "Cairo").await?;

    let removed = FavoriteRepository::new(db)
        .remove(user.id, "Nile View Hotel")
        .await?;

    assert!(removed);

    let count = entity::prelude::Favorite::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests removing a pair that was never favorited.
///
/// Expected: Ok(false), not an error
#[tokio::test]
async fn missing_pair_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;

    let removed = FavoriteRepository::new(db)
        .remove(user.id, "Nile View Hotel")
        .await?;

    assert!(!removed);

    Ok(())
}

/// Tests removal only touches the calling user's row.
///
/// Expected: Ok(true) for the owner; the other user's row survives
#[tokio::test]
async fn removal_is_scoped_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;
    factory::favorite::create_favorite(db, lina.id, "Nile View Hotel", "Cairo").await?;
    factory::favorite::create_favorite(db, omar.id, "Nile View Hotel", "Cairo").await?;

    let removed = FavoriteRepository::new(db)
        .remove(lina.id, "Nile View Hotel")
        .await?;

    assert!(removed);

    let survivor = entity::prelude::Favorite::find_by_id((omar.id, "Nile View Hotel".to_string()))
        .one(db)
        .await?;
    assert!(survivor.is_some());

    Ok(())
}
