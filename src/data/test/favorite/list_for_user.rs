use super::*;

/// Tests listing returns only the calling user's favorites.
///
/// Expected: two items for the owner, the other user's row absent
#[tokio::test]
async fn lists_only_own_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;
    factory::favorite::create_favorite(db, lina.id, "Nile View Hotel", "Cairo").await?;
    factory::favorite::create_favorite(db, lina.id, "Desert Lodge", "Siwa").await?;
    factory::favorite::create_favorite(db, omar.id, "Other Hotel", "Luxor").await?;

    let favorites = FavoriteRepository::new(db).list_for_user(lina.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == lina.id));

    let mut names: Vec<&str> = favorites.iter().map(|f| f.item_name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["Desert Lodge", "Nile View Hotel"]);

    Ok(())
}

/// Tests a user with no favorites gets an empty list.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;

    let favorites = FavoriteRepository::new(db).list_for_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}
