pub use super::booking::Entity as Booking;
pub use super::favorite::Entity as Favorite;
pub use super::user::Entity as User;
