use super::*;

/// Tests restricting the listing to one customer.
///
/// Expected: Ok with only that customer's orders
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    factory::create_order(db, user.id, address.id).await?;
    factory::create_order(db, user.id, address.id).await?;
    factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let page = repo
        .get_paginated(&GetOrdersParam {
            user_id: Some(user.id),
            order_status: None,
            page: PageRequest::default(),
        })
        .await?;

    assert_eq!(page.total_items, 2);
    assert!(page.items.iter().all(|o| o.user_id == user.id));
    assert!(page.items.iter().all(|o| o.details.is_empty()));

    Ok(())
}

/// Tests the order status filter used by the admin listing.
///
/// Expected: Ok with only orders in `Proses`
#[tokio::test]
async fn filters_by_order_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    factory::create_order(db, user.id, address.id).await?;
    let processing = factory::order::OrderFactory::new(db, user.id, address.id)
        .order_status("Proses")
        .payment_status("Konfirmasi")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let page = repo
        .get_paginated(&GetOrdersParam {
            user_id: None,
            order_status: Some(OrderStatus::Processing),
            page: PageRequest::default(),
        })
        .await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, processing.id);

    Ok(())
}
