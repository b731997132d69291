use super::*;

mod require_owner;

/// Tests that an empty permission list only requires a logged-in user.
///
/// Expected: Ok(User) for a customer
#[tokio::test]
async fn empty_permissions_require_login_only() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that an anonymous session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_stale_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}
