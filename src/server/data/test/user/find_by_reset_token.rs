use super::*;

/// Tests finding a user by an unexpired token digest.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_unexpired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .reset_token("digest", Utc::now() + Duration::minutes(10))
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_reset_token("digest", Utc::now())
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an expired token is not matched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .reset_token("digest", Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_reset_token("digest", Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}
