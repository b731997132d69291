//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models,
//! keeping the conversion at the infrastructure boundary.

pub mod amenity;
pub mod analytics;
pub mod reservation;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
