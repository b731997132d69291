use super::*;
use chrono::TimeZone;

/// Tests the half-open creation window.
///
/// Verifies a booking at the start instant is included and one at the end
/// instant is excluded.
///
/// Expected: only bookings with from <= created_at < until
#[tokio::test]
async fn includes_start_excludes_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = Utc.with_ymd_and_hms(2026, 2, 28, 16, 0, 0).unwrap();
    let until = from + Duration::days(1);

    let at_start = TransactionFactory::new(db).created_at(from).build().await?;
    let inside = TransactionFactory::new(db)
        .created_at(from + Duration::hours(12))
        .build()
        .await?;
    TransactionFactory::new(db).created_at(until).build().await?;
    TransactionFactory::new(db)
        .created_at(from - Duration::seconds(1))
        .build()
        .await?;

    let found = TransactionRepository::new(db)
        .get_created_between(from, until)
        .await?;

    let ids: Vec<i32> = found.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![inside.id, at_start.id]);

    Ok(())
}
