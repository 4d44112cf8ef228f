//! Database repository layer for all domain entities.
//!
//! Repositories perform the actual SQL through SeaORM and convert entity
//! models to domain models at the boundary. Every call runs against the
//! shared pool; each operation is its own implicit transaction and no
//! operation observes another's uncommitted state.

pub mod booking;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;
