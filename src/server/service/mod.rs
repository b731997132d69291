//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They enforce business rules, coordinate repositories and outgoing mail, and work
//! with domain models rather than DTOs or entity models.

pub mod amenity;
pub mod analytics;
pub mod auth;
pub mod mail;
pub mod transaction;
