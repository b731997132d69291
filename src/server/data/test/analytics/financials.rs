use super::*;

/// Tests financial totals exclude cancelled bookings.
///
/// Verifies gross sales, cash collected and receivables sum only non-cancelled
/// bookings inside the window.
///
/// Expected: gross 3000, cash 1000, receivables 2000
#[tokio::test]
async fn sums_non_cancelled_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionFactory::new(db)
        .total_amount(1000.0)
        .downpayment(500.0)
        .created_at(local(1, 9))
        .build()
        .await?;
    TransactionFactory::new(db)
        .total_amount(2000.0)
        .downpayment(500.0)
        .booking_status("Confirmed")
        .created_at(local(2, 23))
        .build()
        .await?;
    TransactionFactory::new(db)
        .total_amount(9000.0)
        .booking_status("Cancelled")
        .created_at(local(1, 10))
        .build()
        .await?;
    TransactionFactory::new(db)
        .total_amount(4000.0)
        .created_at(local(3, 0))
        .build()
        .await?;

    let (from, until) = march_window();
    let financials = AnalyticsRepository::new(db).financials(from, until).await?;

    assert_eq!(financials.gross_sales, 3000.0);
    assert_eq!(financials.cash_collected, 1000.0);
    assert_eq!(financials.receivables, 2000.0);

    Ok(())
}

/// Tests financial totals for an empty window.
///
/// Expected: all zero
#[tokio::test]
async fn zero_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (from, until) = march_window();
    let financials = AnalyticsRepository::new(db).financials(from, until).await?;

    assert_eq!(financials.gross_sales, 0.0);
    assert_eq!(financials.cash_collected, 0.0);
    assert_eq!(financials.receivables, 0.0);

    Ok(())
}
