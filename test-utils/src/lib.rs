//! Piscina Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the booking
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//!
//! Factories in [`factory`] insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_booking_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_booking_tables()
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
