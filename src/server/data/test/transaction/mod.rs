use crate::server::{
    data::transaction::TransactionRepository,
    error::AppError,
    model::transaction::{
        BookingStatus, BookingType, CreateReservationParam, CreateTransactionParam, PaymentStatus,
    },
};
use chrono::{Duration, NaiveDate, Utc};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{
        reservation::ReservationFactory, transaction::TransactionFactory, user::create_user,
    },
};

mod apply_extension;
mod check_in;
mod create;
mod find;
mod get_created_between;
mod update_status;

fn booking_param(reservations: Vec<CreateReservationParam>) -> CreateTransactionParam {
    CreateTransactionParam {
        transaction_ref: None,
        customer_name: "Juan Dela Cruz".to_string(),
        contact_number: "09171234567".to_string(),
        customer_address: Some("Calamba".to_string()),
        total_amount: 1000.0,
        downpayment: 500.0,
        balance: 500.0,
        payment_status: PaymentStatus::Partial,
        booking_type: BookingType::Online,
        booking_status: BookingStatus::Pending,
        proof_of_payment: None,
        user_id: None,
        reservations,
    }
}

fn cottage_line() -> CreateReservationParam {
    CreateReservationParam {
        amenity_name: "Cottage A".to_string(),
        quantity: 1,
        price: 1000.0,
        check_in_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        check_out_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        status: "Pending".to_string(),
    }
}
