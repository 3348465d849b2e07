use super::*;

/// Tests that an address is only found for its owner.
///
/// Expected: Ok(Some) for the owner, Ok(None) for another user
#[tokio::test]
async fn finds_only_owned_address() -> Result<(), DbErr> {
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

    assert!(repo.find_owned(address.id, owner.id).await?.is_some());
    assert!(repo.find_owned(address.id, other.id).await?.is_none());

    Ok(())
}
