use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests adding a favorite inserts one stamped row.
///
/// Expected: Ok(()) and a row with the given item and city
#[tokio::test]
async fn adds_favorite_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;

    FavoriteRepository::new(db)
        .add(AddFavoriteParam {
            user_id: user.id,
            item_name: "Nile View Hotel".to_string(),
            city: "Cairo".to_string(),
        })
        .await?;

    let row = entity::prelude::Favorite::find_by_id((user.id, "Nile View Hotel".to_string()))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.city, "Cairo");

    Ok(())
}

/// Tests a duplicate add is absorbed and the original row survives.
///
/// The second add carries a different city; the stored city must remain the
/// one recorded first.
///
/// Expected: Ok(()) both times, one row, original city preserved
#[tokio::test]
async fn duplicate_add_keeps_original_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db, "lina").await?;
    let repo = FavoriteRepository::new(db);

    repo.add(AddFavoriteParam {
        user_id: user.id,
        item_name: "Nile View Hotel".to_string(),
        city: "Cairo".to_string(),
    })
    .await?;

    repo.add(AddFavoriteParam {
        user_id: user.id,
        item_name: "Nile View Hotel".to_string(),
        city: "Giza".to_string(),
    })
    .await?;

    let count = entity::prelude::Favorite::find().count(db).await?;
    assert_eq!(count, 1);

    let row = entity::prelude::Favorite::find_by_id((user.id, "Nile View Hotel".to_string()))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.city, "Cairo");

    Ok(())
}

/// Tests two users can favorite the same item independently.
///
/// Expected: Ok(()) for both, two rows
#[tokio::test]
async fn same_item_allowed_across_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_app_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lina = factory::user::create_user(db, "lina").await?;
    let omar = factory::user::create_user(db, "omar").await?;
    let repo = FavoriteRepository::new(db);

    repo.add(AddFavoriteParam {
        user_id: lina.id,
        item_name: "Nile View Hotel".to_string(),
        city: "Cairo".to_string(),
    })
    .await?;

    repo.add(AddFavoriteParam {
        user_id: omar.id,
        item_name: "Nile View Hotel".to_string(),
        city: "Cairo".to_string(),
    })
    .await?;

    let count = entity::prelude::Favorite::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
