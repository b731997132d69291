use super::*;

/// Tests status counts include cancelled bookings.
///
/// Expected: Cancelled 2, Pending 1
#[tokio::test]
async fn counts_every_status_including_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionFactory::new(db)
        .created_at(local(1, 8))
        .build()
        .await?;
    for _ in 0..2 {
        TransactionFactory::new(db)
            .booking_status("Cancelled")
            .created_at(local(2, 8))
            .build()
            .await?;
    }
    TransactionFactory::new(db)
        .booking_status("Completed")
        .created_at(local(5, 8))
        .build()
        .await?;

    let (from, until) = march_window();
    let operations = AnalyticsRepository::new(db).operations(from, until).await?;

    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0].booking_status, BookingStatus::Cancelled);
    assert_eq!(operations[0].count, 2);
    assert_eq!(operations[1].booking_status, BookingStatus::Pending);
    assert_eq!(operations[1].count, 1);

    Ok(())
}

/// Tests status counts ignore bookings outside the window.
///
/// Expected: no counts
#[tokio::test]
async fn empty_outside_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionFactory::new(db)
        .created_at(local(3, 9))
        .build()
        .await?;

    let (from, until) = march_window();
    let operations = AnalyticsRepository::new(db).operations(from, until).await?;

    assert!(operations.is_empty());

    Ok(())
}
