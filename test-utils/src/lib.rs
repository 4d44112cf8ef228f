//! Staybook Test Utils
//!
//! Shared testing utilities for the staybook backend. Provides a builder for
//! spinning up in-memory SQLite databases with the application schema, a test
//! context that can also hand out a session backed by the same database, and
//! row factories for seeding users, bookings, and favorites.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_booking_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_app_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
