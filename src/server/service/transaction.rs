//! Booking lifecycle: creation, lookups, status transitions and extensions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::transaction::TransactionRepository,
    error::{booking::BookingError, AppError},
    model::{
        analytics::DateRange,
        transaction::{
            history_or_empty, BookingStatus, CreateTransactionParam, ExtensionParam, Transaction,
        },
    },
    util::{time::local_today, token::generate_transaction_ref},
};

/// Attempts at the read-modify-write of an extension before giving up.
pub const MAX_EXTENSION_ATTEMPTS: usize = 3;

pub struct TransactionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransactionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking with its reservation lines.
    ///
    /// A reference is generated when the request carries none.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The stored booking
    /// - `Err(AppError::Conflict)` - The supplied reference is already in use
    pub async fn create(&self, param: CreateTransactionParam) -> Result<Transaction, AppError> {
        let transaction_ref = param
            .transaction_ref
            .clone()
            .unwrap_or_else(generate_transaction_ref);

        let transaction = TransactionRepository::new(self.db)
            .create(param, transaction_ref)
            .await?;

        tracing::info!(
            "Created booking {} ({}) for {}",
            transaction.id,
            transaction.transaction_ref,
            transaction.customer_name
        );

        Ok(transaction)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, AppError> {
        TransactionRepository::new(self.db).find_by_id(id).await
    }

    pub async fn find_by_ref(&self, transaction_ref: &str) -> Result<Option<Transaction>, AppError> {
        TransactionRepository::new(self.db)
            .find_by_ref(transaction_ref.trim())
            .await
    }

    pub async fn find_by_customer(
        &self,
        customer_name: &str,
        contact_number: &str,
    ) -> Result<Vec<Transaction>, AppError> {
        TransactionRepository::new(self.db)
            .find_by_customer(customer_name.trim(), contact_number.trim())
            .await
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Transaction>, AppError> {
        TransactionRepository::new(self.db)
            .find_by_user_id(user_id)
            .await
    }

    /// All bookings with their reservations, newest first.
    pub async fn get_all_with_reservations(&self) -> Result<Vec<Transaction>, AppError> {
        TransactionRepository::new(self.db).get_all().await
    }

    /// Bookings created on the current UTC+8 calendar day, newest first.
    pub async fn get_todays_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let today = local_today();
        let (from, until) = DateRange::new(today, today)?.utc_window();

        TransactionRepository::new(self.db)
            .get_created_between(from, until)
            .await
    }

    /// Moves a booking to a new status along the lifecycle.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The updated booking
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AppError::BookingErr(InvalidTransition))` - The move is not allowed
    /// - `Err(AppError::BookingErr(ConcurrentModification))` - The status changed meanwhile
    pub async fn update_status(&self, id: i32, next: BookingStatus) -> Result<Transaction, AppError> {
        if next == BookingStatus::CheckedIn {
            return self.check_in(id).await;
        }

        let repo = TransactionRepository::new(self.db);
        let current = self.require(id).await?.booking_status;
        current.transition_to(next)?;

        if !repo.update_status(id, current, next).await? {
            return Err(BookingError::ConcurrentModification(id).into());
        }

        tracing::info!("Booking {} moved from {} to {}", id, current, next);

        self.require(id).await
    }

    /// Checks in a confirmed booking, settling the remaining balance.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - Booking is Checked-In, balance 0, Fully Paid
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AppError::BookingErr(InvalidTransition))` - Booking is not Confirmed
    pub async fn check_in(&self, id: i32) -> Result<Transaction, AppError> {
        let repo = TransactionRepository::new(self.db);
        let current = self.require(id).await?.booking_status;
        current.transition_to(BookingStatus::CheckedIn)?;

        if !repo.check_in(id, current).await? {
            return Err(BookingError::ConcurrentModification(id).into());
        }

        tracing::info!("Booking {} checked in", id);

        self.require(id).await
    }

    /// Cancels a booking that is not yet cancelled or completed.
    pub async fn cancel(&self, id: i32) -> Result<Transaction, AppError> {
        self.update_status(id, BookingStatus::Cancelled).await
    }

    /// Appends an extension record and adds its cost to the booking.
    ///
    /// The history is read together with the row version and written back with
    /// a compare-and-swap on that version; a lost race re-reads and retries.
    ///
    /// # Returns
    /// - `Ok(Transaction)` - The extended booking
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AppError::BookingErr(ConcurrentModification))` - Still losing the race
    ///   after the maximum number of attempts
    pub async fn add_extension(
        &self,
        id: i32,
        extension: ExtensionParam,
    ) -> Result<Transaction, AppError> {
        let repo = TransactionRepository::new(self.db);

        for attempt in 1..=MAX_EXTENSION_ATTEMPTS {
            let Some(snapshot) = repo.get_extension_snapshot(id).await? else {
                return Err(transaction_not_found(id));
            };

            let mut history = history_or_empty(snapshot.history);
            history.push(extension.record.clone());

            if repo
                .apply_extension(id, snapshot.version, history, extension.cost)
                .await?
            {
                tracing::info!("Extended booking {} by {:.2}", id, extension.cost);
                return self.require(id).await;
            }

            tracing::debug!(
                "Extension of booking {} lost a concurrent update (attempt {})",
                id,
                attempt
            );
        }

        tracing::warn!(
            "Giving up extending booking {} after {} attempts",
            id,
            MAX_EXTENSION_ATTEMPTS
        );

        Err(BookingError::ConcurrentModification(id).into())
    }

    async fn require(&self, id: i32) -> Result<Transaction, AppError> {
        TransactionRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| transaction_not_found(id))
    }
}

fn transaction_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Transaction {} not found", id))
}
