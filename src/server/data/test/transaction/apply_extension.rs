use super::*;

/// Tests applying an extension at the current version.
///
/// Verifies total and balance grow by the cost, the history is replaced and
/// the version is bumped.
///
/// Expected: Ok(true), total 1500, version 1
#[tokio::test]
async fn applies_at_current_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db).build().await?;
    let repo = TransactionRepository::new(db);

    let snapshot = repo.get_extension_snapshot(stored.id).await?.unwrap();
    assert_eq!(snapshot.version, 0);

    let applied = repo
        .apply_extension(stored.id, snapshot.version, vec![json!({"hours": 2})], 500.0)
        .await?;
    let tx = repo.find_by_id(stored.id).await?.unwrap();

    assert!(applied);
    assert_eq!(tx.total_amount, 1500.0);
    assert_eq!(tx.balance, 1000.0);
    assert_eq!(tx.downpayment, 500.0);
    assert_eq!(tx.extension_history, vec![json!({"hours": 2})]);
    assert_eq!(tx.version, 1);

    Ok(())
}

/// Tests applying an extension with a stale version.
///
/// Expected: Ok(false) and nothing changed
#[tokio::test]
async fn rejects_stale_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db).build().await?;
    let repo = TransactionRepository::new(db);

    repo.apply_extension(stored.id, 0, vec![json!({"n": 1})], 100.0)
        .await?;
    let applied = repo
        .apply_extension(stored.id, 0, vec![json!({"n": 2})], 100.0)
        .await?;
    let tx = repo.find_by_id(stored.id).await?.unwrap();

    assert!(!applied);
    assert_eq!(tx.total_amount, 1100.0);
    assert_eq!(tx.extension_history, vec![json!({"n": 1})]);

    Ok(())
}

/// Tests reading the snapshot of a missing booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn snapshot_of_missing_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let snapshot = TransactionRepository::new(db).get_extension_snapshot(7).await?;

    assert!(snapshot.is_none());

    Ok(())
}
