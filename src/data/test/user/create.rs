use super::*;
use sea_orm::{EntityTrait, PaginatorTrait, SqlErr};

/// Tests inserting a new user.
///
/// Expected: Ok(User) with a generated id and the given username
#[tokio::test]
async fn creates_user_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParam {
            username: "lina".to_string(),
            password_hash: factory::user::DUMMY_PASSWORD_HASH.to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "lina");

    Ok(())
}

/// Tests that a duplicate username violates the unique constraint.
///
/// The failed insert must leave no side effects: exactly one row remains.
///
/// Expected: Err(DbErr) recognized as a unique violation
#[tokio::test]
async fn duplicate_username_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(CreateUserParam {
        username: "lina".to_string(),
        password_hash: factory::user::DUMMY_PASSWORD_HASH.to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParam {
            username: "lina".to_string(),
            password_hash: factory::user::DUMMY_PASSWORD_HASH.to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
