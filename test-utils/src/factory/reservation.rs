//! Reservation factory for creating amenity bookings under a transaction.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    transaction_id: i32,
    amenity_name: String,
    quantity: i32,
    price: f64,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    status: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for the given transaction.
    ///
    /// Defaults to one "Family Cottage" for tomorrow, checking out the day after.
    pub fn new(db: &'a DatabaseConnection, transaction_id: i32) -> Self {
        let tomorrow = Utc::now().date_naive() + Duration::days(1);
        Self {
            db,
            transaction_id,
            amenity_name: "Family Cottage".to_string(),
            quantity: 1,
            price: 1000.0,
            check_in_date: tomorrow,
            check_out_date: tomorrow + Duration::days(1),
            status: "Pending".to_string(),
        }
    }

    pub fn amenity_name(mut self, amenity_name: impl Into<String>) -> Self {
        self.amenity_name = amenity_name.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            transaction_id: ActiveValue::Set(self.transaction_id),
            amenity_name: ActiveValue::Set(self.amenity_name),
            quantity: ActiveValue::Set(self.quantity),
            price: ActiveValue::Set(self.price),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values under `transaction_id`.
pub async fn create_reservation(
    db: &DatabaseConnection,
    transaction_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, transaction_id).build().await
}
