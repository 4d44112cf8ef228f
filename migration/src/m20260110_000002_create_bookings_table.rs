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
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(integer(Bookings::UserId))
                    .col(string(Bookings::UserName))
                    .col(string(Bookings::HotelName))
                    .col(string(Bookings::City))
                    .col(string(Bookings::CheckIn))
                    .col(string(Bookings::CheckOut))
                    .col(double(Bookings::Price))
                    .col(string_null(Bookings::HotelImageUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_user_id")
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    UserId,
    UserName,
    HotelName,
    City,
    CheckIn,
    CheckOut,
    Price,
    HotelImageUrl,
}
