use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(integer(Favorites::UserId))
                    .col(string(Favorites::ItemName))
                    .col(string(Favorites::City))
                    .col(timestamp_with_time_zone(Favorites::AddedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_favorites")
                            .col(Favorites::UserId)
                            .col(Favorites::ItemName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user_id")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorites {
    Table,
    UserId,
    ItemName,
    City,
    AddedAt,
}
