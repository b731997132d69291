use super::*;

/// Tests updating a password directly by user ID.
///
/// Verifies the hash changes and any pending reset token is cleared.
///
/// Expected: Ok(true), token gone
#[tokio::test]
async fn updates_hash_and_clears_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .reset_token("digest", Utc::now() + Duration::minutes(15))
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let updated = repo.update_password(user.id, "new-hash".to_string()).await?;

    assert!(updated);
    assert!(repo.find_by_reset_token("digest", Utc::now()).await?.is_none());
    assert_eq!(
        repo.find_by_id(user.id).await?.unwrap().password_hash,
        "new-hash"
    );

    Ok(())
}

/// Tests updating the password of a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db)
        .update_password(999, "new-hash".to_string())
        .await?;

    assert!(!updated);

    Ok(())
}
