use sea_orm::entity::prelude::*;

/// Hotel booking owned by exactly one user.
///
/// Check-in/check-out dates are kept as opaque strings supplied by the client;
/// `user_name` is the denormalized display name of the owner at booking time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub hotel_name: String,
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub price: f64,
    pub hotel_image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
