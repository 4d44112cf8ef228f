//! Booking data repository.
//!
//! Every read and delete here is owner-scoped: it filters by both booking id
//! and owner id, so a booking id alone never authorizes access and a foreign
//! booking is indistinguishable from a missing one.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::booking::{Booking, CreateBookingParam};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking and returns the generated id.
    ///
    /// Input validation (positive finite price, required fields) happens in
    /// the controller before this call.
    pub async fn create(&self, param: CreateBookingParam) -> Result<i32, DbErr> {
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(param.owner_id),
            user_name: ActiveValue::Set(param.owner_name),
            hotel_name: ActiveValue::Set(param.hotel_name),
            city: ActiveValue::Set(param.city),
            check_in: ActiveValue::Set(param.check_in),
            check_out: ActiveValue::Set(param.check_out),
            price: ActiveValue::Set(param.price),
            hotel_image_url: ActiveValue::Set(param.hotel_image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Lists a user's bookings, most recent first (descending id).
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The user's bookings; empty when they have none
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_user(&self, owner_id: i32) -> Result<Vec<Booking>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(owner_id))
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Booking::from_entity).collect())
    }

    /// Finds a booking by id, scoped to its owner.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The booking exists and belongs to `owner_id`
    /// - `Ok(None)` - No such id, or the booking belongs to another user;
    ///   the two cases are indistinguishable to the caller
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(owner_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Deletes a booking only if the composite `(id, owner)` matches.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - Nothing matched (missing or foreign-owned); not an error
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
