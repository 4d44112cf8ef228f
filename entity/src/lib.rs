//! SeaORM entity definitions for the staybook database schema.

pub mod prelude;

pub mod booking;
pub mod favorite;
pub mod user;
