//! Row factories for seeding test databases.

pub mod booking;
pub mod favorite;
pub mod user;
