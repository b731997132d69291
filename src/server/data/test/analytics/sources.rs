use super::*;

/// Tests per-channel counts and revenue.
///
/// Expected: Online 2 / 3000, Walk-in 1 / 500, cancelled ignored
#[tokio::test]
async fn groups_by_booking_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for total in [1000.0, 2000.0] {
        TransactionFactory::new(db)
            .total_amount(total)
            .created_at(local(1, 12))
            .build()
            .await?;
    }
    TransactionFactory::new(db)
        .booking_type("Walk-in")
        .total_amount(500.0)
        .downpayment(0.0)
        .created_at(local(2, 12))
        .build()
        .await?;
    TransactionFactory::new(db)
        .booking_type("Walk-in")
        .booking_status("Cancelled")
        .created_at(local(2, 12))
        .build()
        .await?;

    let (from, until) = march_window();
    let sources = AnalyticsRepository::new(db).sources(from, until).await?;

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].booking_type, BookingType::Online);
    assert_eq!(sources[0].count, 2);
    assert_eq!(sources[0].revenue, 3000.0);
    assert_eq!(sources[1].booking_type, BookingType::WalkIn);
    assert_eq!(sources[1].count, 1);
    assert_eq!(sources[1].revenue, 500.0);

    Ok(())
}

/// Tests per-channel breakdown when the window holds only cancelled bookings.
///
/// Expected: no groups
#[tokio::test]
async fn empty_when_only_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionFactory::new(db)
        .total_amount(800.0)
        .booking_status("Cancelled")
        .created_at(local(1, 12))
        .build()
        .await?;

    let (from, until) = march_window();
    let sources = AnalyticsRepository::new(db).sources(from, until).await?;

    assert!(sources.is_empty());

    Ok(())
}
