//! HTTP request handlers.
//!
//! Controllers validate input, resolve the session user where the route is
//! protected, delegate to the service layer, and shape responses as DTOs.

pub mod advisor;
pub mod auth;
pub mod booking;
pub mod extract;
pub mod favorite;
