pub mod amenity;
pub mod auth;
pub mod owner;
pub mod transaction;
