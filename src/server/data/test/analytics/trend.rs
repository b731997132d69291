use super::*;

/// Tests daily sales are bucketed by local calendar day.
///
/// Verifies a booking made at 00:30 local time (16:30 UTC the previous day)
/// lands on the local day, and days are ascending.
///
/// Expected: 2026-03-01 -> 1500, 2026-03-02 -> 700
#[tokio::test]
async fn buckets_by_local_day_ascending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionFactory::new(db)
        .total_amount(700.0)
        .downpayment(0.0)
        .created_at(local(2, 12))
        .build()
        .await?;
    TransactionFactory::new(db)
        .total_amount(1000.0)
        .created_at(local(1, 0) + chrono::Duration::minutes(30))
        .build()
        .await?;
    TransactionFactory::new(db)
        .total_amount(500.0)
        .downpayment(0.0)
        .created_at(local(1, 22))
        .build()
        .await?;
    TransactionFactory::new(db)
        .total_amount(9999.0)
        .booking_status("Cancelled")
        .created_at(local(2, 9))
        .build()
        .await?;

    let (from, until) = march_window();
    let trend = AnalyticsRepository::new(db).trend(from, until).await?;

    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    assert_eq!(trend[0].sales, 1500.0);
    assert_eq!(trend[1].date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    assert_eq!(trend[1].sales, 700.0);

    Ok(())
}

/// Tests that days without sales are omitted.
///
/// Expected: empty trend
#[tokio::test]
async fn empty_when_only_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TransactionFactory::new(db)
        .booking_status("Cancelled")
        .created_at(local(1, 12))
        .build()
        .await?;

    let (from, until) = march_window();
    let trend = AnalyticsRepository::new(db).trend(from, until).await?;

    assert!(trend.is_empty());

    Ok(())
}
