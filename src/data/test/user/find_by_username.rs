use super::*;

/// Tests the username lookup carries the stored credential hash.
///
/// Expected: Ok(Some(Model)) exposing password_hash for verification
#[tokio::test]
async fn finds_user_with_credential_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db, "lina").await?;

    let found = UserRepository::new(db).find_by_username("lina").await?;

    let model = found.unwrap();
    assert_eq!(model.username, "lina");
    assert_eq!(model.password_hash, factory::user::DUMMY_PASSWORD_HASH);

    Ok(())
}

/// Tests lookup of a username that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db, "lina").await?;

    let found = UserRepository::new(db).find_by_username("omar").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests the lookup is exact, not case-folded.
///
/// Expected: Ok(None) for a different casing of a stored username
#[tokio::test]
async fn lookup_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db, "lina").await?;

    let found = UserRepository::new(db).find_by_username("Lina").await?;

    assert!(found.is_none());

    Ok(())
}
