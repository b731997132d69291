//! Reservation line repository.
//!
//! Generic over the connection so lines can be inserted inside the database
//! transaction that creates their booking.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::transaction::CreateReservationParam;

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one reservation line for a booking.
    ///
    /// # Arguments
    /// - `transaction_id` - Booking the line belongs to
    /// - `param` - Validated line contents
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including an unknown `transaction_id`
    pub async fn create(
        &self,
        transaction_id: i32,
        param: CreateReservationParam,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            transaction_id: ActiveValue::Set(transaction_id),
            amenity_name: ActiveValue::Set(param.amenity_name),
            quantity: ActiveValue::Set(param.quantity),
            price: ActiveValue::Set(param.price),
            check_in_date: ActiveValue::Set(param.check_in_date),
            check_out_date: ActiveValue::Set(param.check_out_date),
            status: ActiveValue::Set(param.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Loads the reservation lines of several bookings in one query.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Lines keyed by transaction ID, each list ordered by line ID.
    ///   Bookings without lines have no entry.
    pub async fn get_by_transaction_ids(
        &self,
        transaction_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<entity::reservation::Model>>, DbErr> {
        if transaction_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::TransactionId.is_in(transaction_ids))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        let mut by_transaction: HashMap<i32, Vec<entity::reservation::Model>> = HashMap::new();
        for row in rows {
            by_transaction.entry(row.transaction_id).or_default().push(row);
        }

        Ok(by_transaction)
    }
}
