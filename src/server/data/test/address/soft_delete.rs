use super::*;

/// Tests soft deleting an owned address.
///
/// Verifies the row is kept with `deleted_at` set and is hidden from lookups.
///
/// Expected: Ok(true), then lookups return None
#[tokio::test]
async fn marks_address_deleted() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;

    let repo = AddressRepository::new(db);

    assert!(repo.soft_delete(address.id, user.id).await?);
    assert!(repo.find_owned(address.id, user.id).await?.is_none());

    let stored = entity::prelude::Address::find_by_id(address.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests that another user cannot delete the address.
///
/// Expected: Ok(false) and the address remains visible to its owner
#[tokio::test]
async fn ignores_address_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, address) = factory::helpers::create_customer_with_address(db).await?;
    let other = factory::create_user(db).await?;

    let repo = AddressRepository::new(db);

    assert!(!repo.soft_delete(address.id, other.id).await?);
    assert!(repo.find_owned(address.id, owner.id).await?.is_some());

    Ok(())
}
