use super::*;

/// Tests inserting an order with its detail lines.
///
/// Expected: Ok with the initial state, the totals and one detail per line
#[tokio::test]
async fn inserts_order_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let first = Product::from_entity(factory::create_product(db).await?);
    let second = Product::from_entity(
        factory::product::ProductFactory::new(db)
            .price(2000)
            .build()
            .await?,
    );

    let lines = vec![
        LineTotals::new(&first, 2).unwrap(),
        LineTotals::new(&second, 3).unwrap(),
    ];
    let mut totals = OrderTotals::from_lines(&lines).unwrap();
    totals.finalize(1000, 0).unwrap();

    let repo = OrderRepository::new(db);
    let order = repo
        .create(InsertOrderParam {
            order_code: "ORD-20260302-ABCDEF".to_string(),
            user_id: user.id,
            address_id: address.id,
            voucher_id: None,
            totals: totals.clone(),
            state: OrderState::initial(),
            payment_method: PaymentMethod::Transfer,
            lines,
        })
        .await?;

    assert_eq!(order.state, OrderState::initial());
    assert_eq!(order.totals, totals);
    assert_eq!(order.totals.grand_total_price, 8000);
    assert_eq!(order.details.len(), 2);
    assert_eq!(order.details[1].total_price, 6000);

    let found = repo.find_by_code("ORD-20260302-ABCDEF").await?.unwrap();
    assert_eq!(found.id, order.id);
    assert_eq!(found.details.len(), 2);

    Ok(())
}

/// Tests storing gateway payment fields.
///
/// Expected: Ok with token and redirect URL readable afterwards
#[tokio::test]
async fn stores_payment_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    repo.set_payment(
        order.id,
        "snap-token".to_string(),
        "https://pay.example/snap".to_string(),
    )
    .await?;

    let found = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(found.payment_token.as_deref(), Some("snap-token"));
    assert_eq!(found.payment_url.as_deref(), Some("https://pay.example/snap"));

    Ok(())
}
