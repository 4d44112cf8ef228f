//! Domain models, request/response DTOs, and operation parameter types.
//!
//! Domain models are what services and repositories trade in; DTOs are the
//! serialized shapes on the wire. Conversion happens at the controller
//! boundary (`into_dto`) and the repository boundary (`from_entity`).

pub mod advisor;
pub mod api;
pub mod booking;
pub mod favorite;
pub mod user;
