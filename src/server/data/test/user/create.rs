use super::*;

/// Tests creating a customer.
///
/// Verifies that the repository stores the role label and starts experience at zero.
///
/// Expected: Ok with customer role and zero exp
#[tokio::test]
async fn creates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Siti".to_string(),
            email: "siti@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Customer,
        })
        .await?;

    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.exp, 0);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role, "user");

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        name: "Siti".to_string(),
        email: "siti@example.com".to_string(),
        password_hash: "hash".to_string(),
        role: Role::Customer,
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
