use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_admin(db).await?;
    let tokens = TokenCache::new();
    let token = tokens.issue(user.id, TTL).await;

    let result = AuthGuard::new(db, &tokens, Some(&token))
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(result.id, user.id);
    assert!(result.is_admin());

    Ok(())
}

/// Tests customer is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_access_to_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = TokenCache::new();
    let token = tokens.issue(user.id, TTL).await;

    let result = AuthGuard::new(db, &tokens, Some(&token))
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests customer passes when no permission is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_without_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = TokenCache::new();
    let token = tokens.issue(user.id, TTL).await;

    let result = AuthGuard::new(db, &tokens, Some(&token)).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests request without a bearer token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenCache::new();

    let result = AuthGuard::new(db, &tokens, None).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests unknown and revoked tokens.
///
/// Expected: Err(AuthError::InvalidToken) for both
#[tokio::test]
async fn fails_with_unknown_or_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = TokenCache::new();
    let token = tokens.issue(user.id, TTL).await;
    tokens.revoke(&token).await;

    for candidate in [token.as_str(), "not-a-token"] {
        let result = AuthGuard::new(db, &tokens, Some(candidate))
            .require(&[])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    Ok(())
}

/// Tests a token pointing at a user id that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = TokenCache::new();
    let token = tokens.issue(999, TTL).await;

    let result = AuthGuard::new(db, &tokens, Some(&token)).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}
