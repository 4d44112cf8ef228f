//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer: they enforce business rules, coordinate repository calls and the
//! external advisory client, and trade in domain models rather than DTOs or
//! entity models.

pub mod advisor;
pub mod auth;
pub mod booking;
pub mod favorite;
