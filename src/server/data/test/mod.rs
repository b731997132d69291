mod amenity;
mod analytics;
mod transaction;
mod user;
