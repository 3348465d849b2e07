use super::*;

/// Tests that the listing only contains the user's live addresses.
///
/// Expected: Ok with 2 of 3 own addresses after one is deleted, none of another user's
#[tokio::test]
async fn lists_own_live_addresses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_address(db, user.id).await?;
    factory::create_address(db, user.id).await?;
    factory::create_address(db, user.id).await?;
    factory::create_address(db, other.id).await?;

    let repo = AddressRepository::new(db);
    repo.soft_delete(first.id, user.id).await?;

    let page = repo
        .get_by_user_paginated(user.id, PageRequest::default())
        .await?;

    assert_eq!(page.total_items, 2);
    assert!(page.items.iter().all(|a| a.user_id == user.id));
    assert!(page.items.iter().all(|a| a.id != first.id));

    Ok(())
}
