//! Request and response bodies shared by the HTTP layer.

pub mod amenity;
pub mod analytics;
pub mod api;
pub mod transaction;
pub mod user;
