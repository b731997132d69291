use super::*;

/// Tests that a valid token resets the password exactly once.
///
/// Verifies the first call succeeds and clears the token, so a replay of the
/// same digest no longer matches.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn token_is_single_use() -> Result<(), AppError> {
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

    let first = repo
        .reset_password_with_token("digest", "new-hash".to_string(), Utc::now())
        .await?;
    let second = repo
        .reset_password_with_token("digest", "other-hash".to_string(), Utc::now())
        .await?;

    assert!(first);
    assert!(!second);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests that an expired token does not reset the password.
///
/// Expected: Ok(false) and the password hash unchanged
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .reset_token("digest", Utc::now() - Duration::seconds(1))
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let applied = repo
        .reset_password_with_token("digest", "new-hash".to_string(), Utc::now())
        .await?;

    assert!(!applied);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, user.password);

    Ok(())
}
