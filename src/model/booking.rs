//! Booking domain model, DTOs, and creation parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hotel booking owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
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

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            user_name: entity.user_name,
            hotel_name: entity.hotel_name,
            city: entity.city,
            check_in: entity.check_in,
            check_out: entity.check_out,
            price: entity.price,
            hotel_image_url: entity.hotel_image_url,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            hotel_name: self.hotel_name,
            city: self.city,
            check_in: self.check_in,
            check_out: self.check_out,
            price: self.price,
            hotel_image_url: self.hotel_image_url,
        }
    }
}

/// Parameters for inserting a booking.
///
/// Owner identity comes from the session, never from the request body.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub owner_id: i32,
    pub owner_name: String,
    pub hotel_name: String,
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub price: f64,
    pub hotel_image_url: Option<String>,
}

/// Request body for `POST /api/booking`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub hotel_name: String,
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub price: f64,
    pub hotel_image_url: Option<String>,
}

/// Booking as returned by list and detail reads.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub hotel_name: String,
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    pub price: f64,
    pub hotel_image_url: Option<String>,
}

/// Response for a successful booking creation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatedBookingDto {
    pub booking_id: i32,
}
