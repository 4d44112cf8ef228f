use crate::{data::booking::BookingRepository, model::booking::CreateBookingParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_owned;
mod find_owned;
mod list_for_user;

/// Booking parameters against the given owner, varying only the hotel name.
fn booking_param(owner_id: i32, hotel_name: &str) -> CreateBookingParam {
    CreateBookingParam {
        owner_id,
        owner_name: "lina".to_string(),
        hotel_name: hotel_name.to_string(),
        city: "Cairo".to_string(),
        check_in: "2026-03-01".to_string(),
        check_out: "2026-03-05".to_string(),
        price: 450.0,
        hotel_image_url: None,
    }
}
