use super::*;

/// Tests checking in a confirmed booking.
///
/// Verifies the balance is zeroed, payment is marked fully paid and the
/// downpayment is preserved.
///
/// Expected: Ok(true), balance 0, downpayment 300
#[tokio::test]
async fn settles_balance_and_keeps_downpayment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db)
        .total_amount(1200.0)
        .downpayment(300.0)
        .booking_status("Confirmed")
        .build()
        .await?;
    let repo = TransactionRepository::new(db);

    let checked_in = repo.check_in(stored.id, BookingStatus::Confirmed).await?;
    let tx = repo.find_by_id(stored.id).await?.unwrap();

    assert!(checked_in);
    assert_eq!(tx.booking_status, BookingStatus::CheckedIn);
    assert_eq!(tx.payment_status, PaymentStatus::FullyPaid);
    assert_eq!(tx.balance, 0.0);
    assert_eq!(tx.downpayment, 300.0);
    assert_eq!(tx.total_amount, 1200.0);

    Ok(())
}

/// Tests check-in when the booking is no longer in the expected status.
///
/// Expected: Ok(false), balance unchanged
#[tokio::test]
async fn skips_when_status_changed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db)
        .booking_status("Cancelled")
        .build()
        .await?;
    let repo = TransactionRepository::new(db);

    let checked_in = repo.check_in(stored.id, BookingStatus::Confirmed).await?;

    assert!(!checked_in);
    assert_eq!(repo.find_by_id(stored.id).await?.unwrap().balance, 500.0);

    Ok(())
}
