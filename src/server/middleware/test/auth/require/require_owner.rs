use super::*;

/// Tests an owner passes the owner permission check.
///
/// Expected: Ok(User) with the owner role
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_owner(db).await?;
    AuthSession::new(session).set_user_id(owner.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner])
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.id, owner.id);
    assert_eq!(user.role, Role::Owner);

    Ok(())
}

/// Tests a customer is denied the owner permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let customer = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(customer.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == customer.id
    ));

    Ok(())
}
