//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let tx = factory::transaction::TransactionFactory::new(&db)
//!     .total_amount(1000.0)
//!     .booking_status("Confirmed")
//!     .build()
//!     .await?;
//! factory::reservation::create_reservation(&db, tx.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with bcrypt-hashed passwords
//! - `amenity` - Create amenity entities
//! - `transaction` - Create transaction entities
//! - `reservation` - Create reservation entities belonging to a transaction
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod amenity;
pub mod helpers;
pub mod reservation;
pub mod transaction;
pub mod user;

pub use amenity::create_amenity;
pub use reservation::create_reservation;
pub use transaction::create_transaction;
pub use user::create_user;
