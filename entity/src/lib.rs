//! SeaORM entity models for the booking database.
//!
//! Column layouts mirror the migrations in the `migration` crate.

pub mod prelude;

pub mod amenity;
pub mod reservation;
pub mod transaction;
pub mod user;
