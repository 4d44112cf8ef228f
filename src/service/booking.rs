//! Booking business logic.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::booking::BookingRepository,
    error::AppError,
    model::booking::{Booking, CreateBookingParam},
};

/// Service providing business logic for bookings.
///
/// All reads and deletes are owner-scoped; the controller supplies the owner
/// id from the session, never from request input.
pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking and returns the generated id.
    pub async fn create(&self, param: CreateBookingParam) -> Result<i32, AppError> {
        let booking_id = BookingRepository::new(self.db).create(param).await?;

        info!("created booking {}", booking_id);

        Ok(booking_id)
    }

    /// Lists the user's bookings, most recent first.
    pub async fn list(&self, owner_id: i32) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).list_for_user(owner_id).await?)
    }

    /// Fetches one booking, owner-scoped; `None` covers both missing and
    /// foreign-owned ids.
    pub async fn get_owned(&self, id: i32, owner_id: i32) -> Result<Option<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).find_owned(id, owner_id).await?)
    }

    /// Deletes one booking, owner-scoped; false when nothing matched.
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        Ok(BookingRepository::new(self.db).delete_owned(id, owner_id).await?)
    }
}
