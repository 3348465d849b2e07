use super::*;

/// Tests checkout totals for two distinct products.
///
/// Expected: quantity 5, price 8000, per-line values multiplied by quantity
#[tokio::test]
async fn sums_line_totals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let first = factory::product::ProductFactory::new(db)
        .price(1000)
        .discount(100)
        .exp(10)
        .gram_plastic(5)
        .build()
        .await?;
    let second = factory::product::ProductFactory::new(db)
        .price(2000)
        .discount(0)
        .exp(20)
        .gram_plastic(7)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let order = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(
                address.id,
                PaymentMethod::Transfer,
                vec![(first.id, 2), (second.id, 3)],
            ),
        )
        .await?;

    assert_eq!(order.totals.grand_total_quantity, 5);
    assert_eq!(order.totals.grand_total_price, 8000);
    assert_eq!(order.totals.grand_total_discount, 200);
    assert_eq!(order.totals.grand_total_exp, 80);
    assert_eq!(order.totals.grand_total_gram_plastic, 31);
    assert_eq!(order.totals.total_payment, 7800);
    assert_eq!(order.details.len(), 2);
    assert_eq!(order.state.order_status, OrderStatus::AwaitingPayment);
    assert_eq!(order.state.payment_status, PaymentStatus::AwaitingConfirmation);

    Ok(())
}

/// Tests that fees and a voucher feed into the total payment.
///
/// Expected: total_payment = price - discount + shipment_fee + admin_fee
#[tokio::test]
async fn applies_voucher_and_fees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(5000)
        .build()
        .await?;
    let voucher = factory::voucher::VoucherFactory::new(db)
        .discount(1500)
        .min_purchase(10000)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let mut param = checkout(address.id, PaymentMethod::Transfer, vec![(product.id, 2)]);
    param.voucher_id = Some(voucher.id);
    param.shipment_fee = 9000;

    let order = service(db, &gateway, &notifier, 1000)
        .create(&User::from_entity(user), param)
        .await?;

    assert_eq!(order.totals.grand_total_discount, 1500);
    assert_eq!(order.totals.total_payment, 10000 - 1500 + 9000 + 1000);
    assert_eq!(order.voucher_id, Some(voucher.id));

    Ok(())
}

/// Tests that a discount larger than the price floors the goods amount at zero.
///
/// Expected: total_payment equals the fees only
#[tokio::test]
async fn never_charges_negative_goods_amount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(1000)
        .build()
        .await?;
    let voucher = factory::voucher::VoucherFactory::new(db)
        .discount(5000)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let mut param = checkout(address.id, PaymentMethod::Transfer, vec![(product.id, 1)]);
    param.voucher_id = Some(voucher.id);
    param.shipment_fee = 2000;

    let order = service(db, &gateway, &notifier, 500)
        .create(&User::from_entity(user), param)
        .await?;

    assert_eq!(order.totals.total_payment, 2500);

    Ok(())
}

/// Tests that duplicate cart lines are merged before pricing and stock checks.
///
/// Expected: one detail line with the summed quantity, stock reduced once
#[tokio::test]
async fn merges_duplicate_lines_and_decrements_stock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let order = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(
                address.id,
                PaymentMethod::Transfer,
                vec![(product.id, 2), (product.id, 3)],
            ),
        )
        .await?;

    assert_eq!(order.details.len(), 1);
    assert_eq!(order.details[0].quantity, 5);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 5);

    Ok(())
}

/// Tests a gateway checkout.
///
/// Expected: one charge for total_payment, token and URL stored, Created notification
#[tokio::test]
async fn charges_gateway_and_stores_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::create_product(db).await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let order = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(address.id, PaymentMethod::Midtrans, vec![(product.id, 1)]),
        )
        .await?;

    assert_eq!(gateway.charge_count(), 1);
    assert_eq!(
        gateway.charges.lock().unwrap()[0].gross_amount,
        order.totals.total_payment
    );

    let expected_token = format!("token-{}", order.order_code);
    assert_eq!(order.payment_token.as_deref(), Some(expected_token.as_str()));

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.payment_token, Some(expected_token));
    assert!(stored.payment_url.is_some());

    assert!(matches!(
        notifier.sent().as_slice(),
        [OrderNotification::Created { .. }]
    ));

    Ok(())
}

/// Tests that a rejected charge rolls back the whole checkout.
///
/// Expected: Err(PaymentErr), no order rows, stock unchanged, nothing notified
#[tokio::test]
async fn rolls_back_when_gateway_rejects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(4)
        .build()
        .await?;

    let gateway = FakeGateway::rejecting();
    let notifier = RecordingNotifier::default();
    let result = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(address.id, PaymentMethod::Midtrans, vec![(product.id, 2)]),
        )
        .await;

    assert!(matches!(result, Err(AppError::PaymentErr(_))));

    let orders = entity::prelude::Order::find().all(db).await?;
    let details = entity::prelude::OrderDetail::find().all(db).await?;
    assert!(orders.is_empty());
    assert!(details.is_empty());

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 4);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests duplicate cart lines whose summed quantity overflows.
///
/// Expected: Err(BadRequest), no order created, stock unchanged
#[tokio::test]
async fn rejects_overflowing_duplicate_lines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(10)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let result = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(
                address.id,
                PaymentMethod::Transfer,
                vec![(product.id, i32::MAX), (product.id, 3)],
            ),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.stock, 10);

    Ok(())
}

/// Tests a quantity above the available stock.
///
/// Expected: Err(BadRequest) and no order created
#[tokio::test]
async fn rejects_insufficient_stock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .stock(1)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let result = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(address.id, PaymentMethod::Transfer, vec![(product.id, 2)]),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Order::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests a cart referencing a soft-deleted product.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_deleted_product() -> Result<(), AppError> {
    use crate::server::data::product::ProductRepository;

    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::create_product(db).await?;
    ProductRepository::new(db).soft_delete(product.id).await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let result = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(address.id, PaymentMethod::Transfer, vec![(product.id, 1)]),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests checkout with another customer's address.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_foreign_address() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_customer_with_address(db).await?;
    let (_, other_address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::create_product(db).await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let result = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(other_address.id, PaymentMethod::Transfer, vec![(product.id, 1)]),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests vouchers outside their window or above the order price.
///
/// Expected: Err(BadRequest) for both
#[tokio::test]
async fn rejects_unusable_vouchers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let user = User::from_entity(user);
    let product = factory::product::ProductFactory::new(db)
        .price(1000)
        .build()
        .await?;
    let expired = factory::voucher::VoucherFactory::new(db)
        .start_date(Utc::now() - Duration::days(10))
        .end_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let high_minimum = factory::voucher::VoucherFactory::new(db)
        .min_purchase(50000)
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let service = service(db, &gateway, &notifier, 0);

    for voucher_id in [expired.id, high_minimum.id] {
        let mut param = checkout(address.id, PaymentMethod::Transfer, vec![(product.id, 1)]);
        param.voucher_id = Some(voucher_id);

        let result = service.create(&user, param).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests that a failing notifier does not fail checkout.
///
/// Expected: Ok(order) with one attempted notification
#[tokio::test]
async fn notification_failure_keeps_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let product = factory::product::create_product(db).await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::failing();
    let order = service(db, &gateway, &notifier, 0)
        .create(
            &User::from_entity(user),
            checkout(address.id, PaymentMethod::Transfer, vec![(product.id, 1)]),
        )
        .await?;

    assert_eq!(notifier.sent().len(), 1);
    assert!(entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
