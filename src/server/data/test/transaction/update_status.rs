use super::*;

/// Tests a status change when the stored status matches the expected one.
///
/// Expected: Ok(true) and the new status persisted
#[tokio::test]
async fn updates_when_status_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db).build().await?;
    let repo = TransactionRepository::new(db);

    let updated = repo
        .update_status(stored.id, BookingStatus::Pending, BookingStatus::Confirmed)
        .await?;

    assert!(updated);
    assert_eq!(
        repo.find_by_id(stored.id).await?.unwrap().booking_status,
        BookingStatus::Confirmed
    );

    Ok(())
}

/// Tests a status change racing with another change.
///
/// Verifies the update is skipped when the stored status is no longer the
/// expected one.
///
/// Expected: Ok(false) and the stored status untouched
#[tokio::test]
async fn skips_when_status_changed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db)
        .booking_status("Cancelled")
        .build()
        .await?;
    let repo = TransactionRepository::new(db);

    let updated = repo
        .update_status(stored.id, BookingStatus::Pending, BookingStatus::Confirmed)
        .await?;

    assert!(!updated);
    assert_eq!(
        repo.find_by_id(stored.id).await?.unwrap().booking_status,
        BookingStatus::Cancelled
    );

    Ok(())
}
