//! Transaction (booking) repository.
//!
//! Every read returns bookings with their reservation lines attached. Status
//! changes and extensions are conditional updates: they report through their
//! return value whether the row still matched the expected state, leaving the
//! retry or rejection decision to the service layer.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use serde_json::Value;

use crate::server::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::transaction::{BookingStatus, CreateTransactionParam, PaymentStatus, Transaction},
};

/// Stored extension history and the version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionSnapshot {
    pub history: Option<Value>,
    pub version: i32,
}

pub struct TransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking and its reservation lines atomically.
    ///
    /// # Arguments
    /// - `param` - Validated booking
    /// - `transaction_ref` - Public reference, unique across bookings
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The stored booking with its lines
    /// - `Err(AppError::Conflict)` - The reference is already in use
    /// - `Err(AppError::DbErr)` - Any other database error; nothing was written
    pub async fn create(
        &self,
        param: CreateTransactionParam,
        transaction_ref: String,
    ) -> Result<Transaction, AppError> {
        let txn = self.db.begin().await?;

        let inserted = entity::transaction::ActiveModel {
            transaction_ref: ActiveValue::Set(transaction_ref),
            customer_name: ActiveValue::Set(param.customer_name),
            contact_number: ActiveValue::Set(param.contact_number),
            customer_address: ActiveValue::Set(param.customer_address),
            total_amount: ActiveValue::Set(param.total_amount),
            downpayment: ActiveValue::Set(param.downpayment),
            balance: ActiveValue::Set(param.balance),
            payment_status: ActiveValue::Set(param.payment_status.as_str().to_string()),
            booking_type: ActiveValue::Set(param.booking_type.as_str().to_string()),
            booking_status: ActiveValue::Set(param.booking_status.as_str().to_string()),
            proof_of_payment: ActiveValue::Set(param.proof_of_payment),
            user_id: ActiveValue::Set(param.user_id),
            extension_history: ActiveValue::Set(Some(Value::Array(Vec::new()))),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        let entity = match inserted {
            Ok(entity) => entity,
            Err(err) => {
                return match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(
                        "Transaction reference already exists".to_string(),
                    )),
                    _ => Err(err.into()),
                };
            }
        };

        let reservation_repo = ReservationRepository::new(&txn);
        let mut reservations = Vec::with_capacity(param.reservations.len());
        for reservation in param.reservations {
            reservations.push(reservation_repo.create(entity.id, reservation).await?);
        }

        txn.commit().await?;

        Transaction::from_entity(entity, reservations)
    }

    /// Gets a booking by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, AppError> {
        let entity = entity::prelude::Transaction::find_by_id(id)
            .one(self.db)
            .await?;

        self.attach_one(entity).await
    }

    /// Gets a booking by its public reference.
    pub async fn find_by_ref(&self, transaction_ref: &str) -> Result<Option<Transaction>, AppError> {
        let entity = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::TransactionRef.eq(transaction_ref))
            .one(self.db)
            .await?;

        self.attach_one(entity).await
    }

    /// Gets bookings matching both customer name and contact number, newest first.
    pub async fn find_by_customer(
        &self,
        customer_name: &str,
        contact_number: &str,
    ) -> Result<Vec<Transaction>, AppError> {
        let entities = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::CustomerName.eq(customer_name))
            .filter(entity::transaction::Column::ContactNumber.eq(contact_number))
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?;

        self.attach_many(entities).await
    }

    /// Gets bookings placed by a registered user, newest first.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Transaction>, AppError> {
        let entities = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::UserId.eq(user_id))
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?;

        self.attach_many(entities).await
    }

    /// Gets every booking, newest first.
    pub async fn get_all(&self) -> Result<Vec<Transaction>, AppError> {
        let entities = entity::prelude::Transaction::find()
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?;

        self.attach_many(entities).await
    }

    /// Gets bookings created within `[from, until)`, newest first.
    pub async fn get_created_between(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, AppError> {
        let entities = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::CreatedAt.gte(from))
            .filter(entity::transaction::Column::CreatedAt.lt(until))
            .order_by_desc(entity::transaction::Column::CreatedAt)
            .order_by_desc(entity::transaction::Column::Id)
            .all(self.db)
            .await?;

        self.attach_many(entities).await
    }

    /// Sets the booking status if it still equals `expected`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Booking missing or its status changed meanwhile
    pub async fn update_status(
        &self,
        id: i32,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Transaction::update_many()
            .col_expr(
                entity::transaction::Column::BookingStatus,
                Expr::value(next.as_str()),
            )
            .filter(entity::transaction::Column::Id.eq(id))
            .filter(entity::transaction::Column::BookingStatus.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks the booking checked in and settles the balance, if its status still
    /// equals `expected`. The downpayment is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking checked in
    /// - `Ok(false)` - Booking missing or its status changed meanwhile
    pub async fn check_in(&self, id: i32, expected: BookingStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Transaction::update_many()
            .col_expr(
                entity::transaction::Column::BookingStatus,
                Expr::value(BookingStatus::CheckedIn.as_str()),
            )
            .col_expr(entity::transaction::Column::Balance, Expr::value(0.0_f64))
            .col_expr(
                entity::transaction::Column::PaymentStatus,
                Expr::value(PaymentStatus::FullyPaid.as_str()),
            )
            .filter(entity::transaction::Column::Id.eq(id))
            .filter(entity::transaction::Column::BookingStatus.eq(expected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Reads the raw extension history and version of a booking.
    ///
    /// # Returns
    /// - `Ok(Some(ExtensionSnapshot))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    pub async fn get_extension_snapshot(&self, id: i32) -> Result<Option<ExtensionSnapshot>, DbErr> {
        let row = entity::prelude::Transaction::find_by_id(id)
            .select_only()
            .column(entity::transaction::Column::ExtensionHistory)
            .column(entity::transaction::Column::Version)
            .into_tuple::<(Option<Value>, i32)>()
            .one(self.db)
            .await?;

        Ok(row.map(|(history, version)| ExtensionSnapshot { history, version }))
    }

    /// Replaces the extension history and adds `cost` to both total and balance,
    /// provided the booking is still at `expected_version`. Bumps the version.
    ///
    /// # Arguments
    /// - `id` - Booking to extend
    /// - `expected_version` - Version the history was read at
    /// - `history` - Full new history, previous records first
    /// - `cost` - Amount added to `total_amount` and `balance`
    ///
    /// # Returns
    /// - `Ok(true)` - Update applied
    /// - `Ok(false)` - Version moved on (or booking vanished); re-read and retry
    pub async fn apply_extension(
        &self,
        id: i32,
        expected_version: i32,
        history: Vec<Value>,
        cost: f64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Transaction::update_many()
            .col_expr(
                entity::transaction::Column::ExtensionHistory,
                Expr::value(Value::Array(history)),
            )
            .col_expr(
                entity::transaction::Column::TotalAmount,
                Expr::col(entity::transaction::Column::TotalAmount).add(cost),
            )
            .col_expr(
                entity::transaction::Column::Balance,
                Expr::col(entity::transaction::Column::Balance).add(cost),
            )
            .col_expr(
                entity::transaction::Column::Version,
                Expr::col(entity::transaction::Column::Version).add(1),
            )
            .filter(entity::transaction::Column::Id.eq(id))
            .filter(entity::transaction::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn attach_one(
        &self,
        entity: Option<entity::transaction::Model>,
    ) -> Result<Option<Transaction>, AppError> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        let mut transactions = self.attach_many(vec![entity]).await?;

        Ok(transactions.pop())
    }

    /// Loads reservation lines for the given rows and converts them to domain
    /// models, preserving row order.
    async fn attach_many(
        &self,
        entities: Vec<entity::transaction::Model>,
    ) -> Result<Vec<Transaction>, AppError> {
        let ids = entities.iter().map(|entity| entity.id).collect();
        let mut reservations = ReservationRepository::new(self.db)
            .get_by_transaction_ids(ids)
            .await?;

        entities
            .into_iter()
            .map(|entity| {
                let lines = reservations.remove(&entity.id).unwrap_or_default();
                Transaction::from_entity(entity, lines)
            })
            .collect()
    }
}
