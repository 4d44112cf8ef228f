use super::*;

/// Tests finding an existing user by primary key.
///
/// Expected: Ok(Some(User)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::user::create_user(db, "lina").await?;

    let found = UserRepository::new(db).find_by_id(seeded.id).await?;

    let user = found.unwrap();
    assert_eq!(user.id, seeded.id);
    assert_eq!(user.username, "lina");

    Ok(())
}

/// Tests querying for an id with no row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
