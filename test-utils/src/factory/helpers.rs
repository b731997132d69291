//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a transaction owned by that user and one reservation.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, transaction, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::transaction::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let transaction = crate::factory::transaction::TransactionFactory::new(db)
        .user_id(user.id)
        .build()
        .await?;
    let reservation = crate::factory::reservation::create_reservation(db, transaction.id).await?;

    Ok((user, transaction, reservation))
}
