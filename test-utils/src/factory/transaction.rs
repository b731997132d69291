//! Transaction factory for creating test bookings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transactions with customizable fields.
///
/// Defaults describe a pending online booking of 1000.0 with 500.0 paid down.
///
/// # Example
///
/// ```rust,ignore
/// let tx = TransactionFactory::new(&db)
///     .booking_status("Cancelled")
///     .created_at(Utc::now() - Duration::days(2))
///     .build()
///     .await?;
/// ```
pub struct TransactionFactory<'a> {
    db: &'a DatabaseConnection,
    transaction_ref: String,
    customer_name: String,
    contact_number: String,
    customer_address: Option<String>,
    total_amount: f64,
    downpayment: f64,
    balance: f64,
    payment_status: String,
    booking_type: String,
    booking_status: String,
    user_id: Option<i32>,
    extension_history: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
}

impl<'a> TransactionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            transaction_ref: format!("TX-TEST{:04}", id),
            customer_name: format!("Customer {}", id),
            contact_number: format!("0917{:07}", id),
            customer_address: Some("Laguna".to_string()),
            total_amount: 1000.0,
            downpayment: 500.0,
            balance: 500.0,
            payment_status: "Partial".to_string(),
            booking_type: "Online".to_string(),
            booking_status: "Pending".to_string(),
            user_id: None,
            extension_history: None,
            created_at: Utc::now(),
        }
    }

    pub fn transaction_ref(mut self, transaction_ref: impl Into<String>) -> Self {
        self.transaction_ref = transaction_ref.into();
        self
    }

    /// Sets customer name and contact number together, as lookups use both.
    pub fn customer(mut self, name: impl Into<String>, contact: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self.contact_number = contact.into();
        self
    }

    /// Sets the total; balance becomes `total_amount - downpayment`.
    pub fn total_amount(mut self, total_amount: f64) -> Self {
        self.total_amount = total_amount;
        self.balance = total_amount - self.downpayment;
        self
    }

    /// Sets the downpayment; balance becomes `total_amount - downpayment`.
    pub fn downpayment(mut self, downpayment: f64) -> Self {
        self.downpayment = downpayment;
        self.balance = self.total_amount - downpayment;
        self
    }

    pub fn booking_type(mut self, booking_type: impl Into<String>) -> Self {
        self.booking_type = booking_type.into();
        self
    }

    pub fn booking_status(mut self, booking_status: impl Into<String>) -> Self {
        self.booking_status = booking_status.into();
        self
    }

    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the raw stored history, which may deliberately be malformed.
    pub fn extension_history(mut self, history: serde_json::Value) -> Self {
        self.extension_history = Some(history);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the transaction entity into the database.
    pub async fn build(self) -> Result<entity::transaction::Model, DbErr> {
        entity::transaction::ActiveModel {
            transaction_ref: ActiveValue::Set(self.transaction_ref),
            customer_name: ActiveValue::Set(self.customer_name),
            contact_number: ActiveValue::Set(self.contact_number),
            customer_address: ActiveValue::Set(self.customer_address),
            total_amount: ActiveValue::Set(self.total_amount),
            downpayment: ActiveValue::Set(self.downpayment),
            balance: ActiveValue::Set(self.balance),
            payment_status: ActiveValue::Set(self.payment_status),
            booking_type: ActiveValue::Set(self.booking_type),
            booking_status: ActiveValue::Set(self.booking_status),
            proof_of_payment: ActiveValue::Set(None),
            user_id: ActiveValue::Set(self.user_id),
            extension_history: ActiveValue::Set(self.extension_history),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending transaction with default values.
pub async fn create_transaction(
    db: &DatabaseConnection,
) -> Result<entity::transaction::Model, DbErr> {
    TransactionFactory::new(db).build().await
}
