pub use super::amenity::Entity as Amenity;
pub use super::reservation::Entity as Reservation;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
