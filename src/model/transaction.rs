use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub amenity_name: String,
    pub quantity: i32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub transaction_ref: String,
    pub customer_name: String,
    pub contact_number: String,
    pub customer_address: Option<String>,
    pub total_amount: f64,
    pub downpayment: f64,
    pub balance: f64,
    pub payment_status: String,
    pub booking_type: String,
    pub booking_status: String,
    pub proof_of_payment: Option<String>,
    pub user_id: Option<i32>,
    /// Extension records in the order they were added.
    #[schema(value_type = Vec<Object>)]
    pub extension_history: Vec<Value>,
    pub created_at: DateTime<Utc>,
    pub reservations: Vec<ReservationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReservationDto {
    pub amenity_name: String,
    pub quantity: i32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionDto {
    pub transaction_ref: Option<String>,
    pub customer_name: String,
    pub contact_number: String,
    pub customer_address: Option<String>,
    pub total_amount: f64,
    pub downpayment: f64,
    pub balance: f64,
    pub payment_status: Option<String>,
    pub booking_type: Option<String>,
    pub booking_status: Option<String>,
    pub proof_of_payment: Option<String>,
    #[serde(default)]
    pub reservations: Vec<CreateReservationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedTransactionDto {
    pub id: i32,
    pub transaction_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub booking_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddExtensionDto {
    /// Opaque record appended to the extension history.
    #[schema(value_type = Object)]
    pub extension: Value,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct CustomerLookupQuery {
    pub customer_name: String,
    pub contact_number: String,
}
