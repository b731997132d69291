//! Booking domain models, lifecycle enums and parameters.
//!
//! A transaction is one booking: customer details, money owed and paid, and the
//! booking lifecycle status. Reservations are the per-amenity lines of a
//! transaction and are always loaded together with it.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::{
    model::transaction::{
        CreateReservationDto, CreateTransactionDto, ReservationDto, TransactionDto,
    },
    server::{
        error::{booking::BookingError, validation::ValidationError, AppError},
        model::user::{Role, User},
        util::parse::parse_stored,
    },
};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::CheckedIn => "Checked-In",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Whether `next` is a legal successor of this status.
    ///
    /// Cancelled and Completed are terminal; every other status may move forward
    /// one step or be cancelled.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;

        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (CheckedIn, Completed)
                | (CheckedIn, Cancelled)
        )
    }

    /// Validates a status change.
    ///
    /// # Returns
    /// - `Ok(next)` - The move is allowed
    /// - `Err(BookingError::InvalidTransition)` - The move is not an edge of the lifecycle
    pub fn transition_to(self, next: BookingStatus) -> Result<BookingStatus, BookingError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(BookingError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

impl FromStr for BookingStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Checked-In" => Ok(BookingStatus::CheckedIn),
            "Cancelled" => Ok(BookingStatus::Cancelled),
            "Completed" => Ok(BookingStatus::Completed),
            other => Err(ValidationError::UnknownValue {
                field: "booking_status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel through which the booking was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingType {
    #[default]
    Online,
    WalkIn,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Online => "Online",
            BookingType::WalkIn => "Walk-in",
        }
    }
}

impl FromStr for BookingType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Online" => Ok(BookingType::Online),
            "Walk-in" => Ok(BookingType::WalkIn),
            other => Err(ValidationError::UnknownValue {
                field: "booking_type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Partial,
    FullyPaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Partial => "Partial",
            PaymentStatus::FullyPaid => "Fully Paid",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Partial" => Ok(PaymentStatus::Partial),
            "Fully Paid" => Ok(PaymentStatus::FullyPaid),
            other => Err(ValidationError::UnknownValue {
                field: "payment_status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One amenity line of a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub transaction_id: i32,
    pub amenity_name: String,
    pub quantity: i32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            transaction_id: entity.transaction_id,
            amenity_name: entity.amenity_name,
            quantity: entity.quantity,
            price: entity.price,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            amenity_name: self.amenity_name,
            quantity: self.quantity,
            price: self.price,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: self.status,
        }
    }
}

/// A booking with its reservations.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i32,
    pub transaction_ref: String,
    pub customer_name: String,
    pub contact_number: String,
    pub customer_address: Option<String>,
    pub total_amount: f64,
    pub downpayment: f64,
    pub balance: f64,
    pub payment_status: PaymentStatus,
    pub booking_type: BookingType,
    pub booking_status: BookingStatus,
    pub proof_of_payment: Option<String>,
    pub user_id: Option<i32>,
    /// Extension records, oldest first.
    pub extension_history: Vec<Value>,
    /// Optimistic concurrency counter, bumped on every extension.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub reservations: Vec<Reservation>,
}

impl Transaction {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// A missing or non-array `extension_history` is read as an empty history.
    ///
    /// # Arguments
    /// - `entity` - The transaction row
    /// - `reservations` - Reservation rows belonging to the transaction
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - A stored enum column holds an unknown value
    pub fn from_entity(
        entity: entity::transaction::Model,
        reservations: Vec<entity::reservation::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            transaction_ref: entity.transaction_ref,
            customer_name: entity.customer_name,
            contact_number: entity.contact_number,
            customer_address: entity.customer_address,
            total_amount: entity.total_amount,
            downpayment: entity.downpayment,
            balance: entity.balance,
            payment_status: parse_stored("payment_status", entity.payment_status)?,
            booking_type: parse_stored("booking_type", entity.booking_type)?,
            booking_status: parse_stored("booking_status", entity.booking_status)?,
            proof_of_payment: entity.proof_of_payment,
            user_id: entity.user_id,
            extension_history: history_or_empty(entity.extension_history),
            version: entity.version,
            created_at: entity.created_at,
            reservations: reservations
                .into_iter()
                .map(Reservation::from_entity)
                .collect(),
        })
    }

    pub fn into_dto(self) -> TransactionDto {
        TransactionDto {
            id: self.id,
            transaction_ref: self.transaction_ref,
            customer_name: self.customer_name,
            contact_number: self.contact_number,
            customer_address: self.customer_address,
            total_amount: self.total_amount,
            downpayment: self.downpayment,
            balance: self.balance,
            payment_status: self.payment_status.to_string(),
            booking_type: self.booking_type.to_string(),
            booking_status: self.booking_status.to_string(),
            proof_of_payment: self.proof_of_payment,
            user_id: self.user_id,
            extension_history: self.extension_history,
            created_at: self.created_at,
            reservations: self
                .reservations
                .into_iter()
                .map(Reservation::into_dto)
                .collect(),
        }
    }
}

/// Reads a stored extension history, treating anything but a JSON array as empty.
pub fn history_or_empty(stored: Option<Value>) -> Vec<Value> {
    match stored {
        Some(Value::Array(records)) => records,
        _ => Vec::new(),
    }
}

/// Parameters for inserting one reservation line.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub amenity_name: String,
    pub quantity: i32,
    pub price: f64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
}

impl CreateReservationParam {
    /// Validates a reservation line from a booking request.
    ///
    /// # Returns
    /// - `Ok(CreateReservationParam)` - Valid line, status defaulted to `Pending`
    /// - `Err(ValidationError)` - Empty name, non-positive quantity, negative price,
    ///   or check-out before check-in
    pub fn from_dto(dto: CreateReservationDto) -> Result<Self, ValidationError> {
        let amenity_name = dto.amenity_name.trim().to_string();
        if amenity_name.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if dto.quantity < 1 {
            return Err(ValidationError::Invalid(
                "Reservation quantity must be at least 1".to_string(),
            ));
        }
        if !is_valid_amount(dto.price) {
            return Err(ValidationError::InvalidAmount("price"));
        }
        if dto.check_out_date < dto.check_in_date {
            return Err(ValidationError::Invalid(
                "Check-out date must not be before check-in date".to_string(),
            ));
        }

        Ok(Self {
            amenity_name,
            quantity: dto.quantity,
            price: dto.price,
            check_in_date: dto.check_in_date,
            check_out_date: dto.check_out_date,
            status: dto
                .status
                .filter(|status| !status.trim().is_empty())
                .unwrap_or_else(|| BookingStatus::Pending.to_string()),
        })
    }
}

/// Parameters for inserting a booking and its reservations.
#[derive(Debug, Clone)]
pub struct CreateTransactionParam {
    pub transaction_ref: Option<String>,
    pub customer_name: String,
    pub contact_number: String,
    pub customer_address: Option<String>,
    pub total_amount: f64,
    pub downpayment: f64,
    pub balance: f64,
    pub payment_status: PaymentStatus,
    pub booking_type: BookingType,
    pub booking_status: BookingStatus,
    pub proof_of_payment: Option<String>,
    pub user_id: Option<i32>,
    pub reservations: Vec<CreateReservationParam>,
}

impl CreateTransactionParam {
    /// Validates a booking request.
    ///
    /// Missing enum fields default to `Online`, `Partial` and `Pending`. Only an
    /// owner may open a booking in another status or payment state, e.g. a
    /// walk-in that is already paid. Bookings placed by a customer are linked to
    /// their account; bookings entered by an owner are not.
    ///
    /// # Arguments
    /// - `dto` - Booking request body
    /// - `placed_by` - Logged-in user placing the booking, if any
    ///
    /// # Returns
    /// - `Ok(CreateTransactionParam)` - Valid booking
    /// - `Err(ValidationError)` - Missing customer fields, negative or inconsistent
    ///   amounts, unknown enum values, or a non-owner setting the initial status
    pub fn from_dto(
        dto: CreateTransactionDto,
        placed_by: Option<&User>,
    ) -> Result<Self, ValidationError> {
        let customer_name = dto.customer_name.trim().to_string();
        let contact_number = dto.contact_number.trim().to_string();
        if customer_name.is_empty() || contact_number.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        for (field, amount) in [
            ("total_amount", dto.total_amount),
            ("downpayment", dto.downpayment),
            ("balance", dto.balance),
        ] {
            if !is_valid_amount(amount) {
                return Err(ValidationError::InvalidAmount(field));
            }
        }

        if (dto.downpayment + dto.balance - dto.total_amount).abs() > AMOUNT_TOLERANCE {
            return Err(ValidationError::Invalid(
                "Downpayment plus balance must equal the total amount".to_string(),
            ));
        }

        let payment_status = parse_or_default(dto.payment_status)?;
        let booking_type = parse_or_default(dto.booking_type)?;
        let booking_status = match dto.booking_status {
            Some(status) => status.parse()?,
            None => BookingStatus::Pending,
        };

        let is_owner = placed_by.is_some_and(|user| user.role == Role::Owner);
        if !is_owner
            && (booking_status != BookingStatus::Pending
                || payment_status != PaymentStatus::Partial)
        {
            return Err(ValidationError::Invalid(
                "New bookings start as Pending with a partial payment".to_string(),
            ));
        }

        let reservations = dto
            .reservations
            .into_iter()
            .map(CreateReservationParam::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            transaction_ref: dto
                .transaction_ref
                .map(|reference| reference.trim().to_string())
                .filter(|reference| !reference.is_empty()),
            customer_name,
            contact_number,
            customer_address: dto.customer_address,
            total_amount: dto.total_amount,
            downpayment: dto.downpayment,
            balance: dto.balance,
            payment_status,
            booking_type,
            booking_status,
            proof_of_payment: dto.proof_of_payment,
            user_id: placed_by
                .filter(|user| user.role != Role::Owner)
                .map(|user| user.id),
            reservations,
        })
    }
}

/// Largest rounding difference accepted between `total_amount` and its parts.
const AMOUNT_TOLERANCE: f64 = 0.005;

fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

fn parse_or_default<T>(value: Option<String>) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError> + Default,
{
    match value {
        Some(value) => value.parse(),
        None => Ok(T::default()),
    }
}

/// A validated extension record and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionParam {
    pub record: Value,
    pub cost: f64,
}

impl ExtensionParam {
    /// # Returns
    /// - `Err(ValidationError::InvalidAmount)` - Cost is negative or not finite
    pub fn new(record: Value, cost: f64) -> Result<Self, ValidationError> {
        if !is_valid_amount(cost) {
            return Err(ValidationError::InvalidAmount("cost"));
        }

        Ok(Self { record, cost })
    }
}
