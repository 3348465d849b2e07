use super::*;

/// Tests that a soft-deleted order disappears from every read.
///
/// Expected: Ok(true), then find_by_id, find_by_code and listings skip it
#[tokio::test]
async fn hides_deleted_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.soft_delete(order.id).await?);
    assert!(repo.find_by_id(order.id).await?.is_none());
    assert!(repo.find_by_code(&order.order_code).await?.is_none());
    assert!(!repo.update_state(order.id, OrderState::initial()).await?);

    let page = repo
        .get_paginated(&GetOrdersParam {
            user_id: Some(user.id),
            order_status: None,
            page: PageRequest::default(),
        })
        .await?;
    assert_eq!(page.total_items, 0);

    Ok(())
}
