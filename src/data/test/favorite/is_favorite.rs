use super::*;

/// Tests membership reads true for a stored pair.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_for_stored_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;
    factory::favorite::create_favorite(db, user.id, "Nile View Hotel", "Cairo").await?;

    let is_favorite = FavoriteRepository::new(db)
        .is_favorite(user.id, "Nile View Hotel")
        .await?;

    assert!(is_favorite);

    Ok(())
}

/// Tests membership is per-user: another user's favorite does not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_other_users_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;
    factory::favorite::create_favorite(db, omar.id, "Nile View Hotel", "Cairo").await?;

    let is_favorite = FavoriteRepository::new(db)
        .is_favorite(lina.id, "Nile View Hotel")
        .await?;

    assert!(!is_favorite);

    Ok(())
}
