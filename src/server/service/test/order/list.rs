use super::*;

/// Tests that customers only see their own orders while admins see any.
///
/// Expected: owner and admin get the order, another customer gets NotFound
#[tokio::test]
async fn get_is_limited_to_owner_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let stranger = User::from_entity(factory::user::create_user(db).await?);
    let admin = User::from_entity(factory::user::create_admin(db).await?);
    let owner = User::from_entity(owner);

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let service = service(db, &gateway, &notifier, 0);

    assert_eq!(service.get(order.id, &owner).await?.id, order.id);
    assert_eq!(service.get(order.id, &admin).await?.id, order.id);
    assert!(matches!(
        service.get(order.id, &stranger).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the customer listing.
///
/// Expected: only the user's orders are counted
#[tokio::test]
async fn lists_only_own_orders() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    for _ in 0..3 {
        factory::order::create_order(db, user.id, address.id).await?;
    }
    factory::helpers::create_order_with_dependencies(db).await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let page = service(db, &gateway, &notifier, 0)
        .list_for_user(&User::from_entity(user.clone()), PageRequest::new(1, 2))
        .await?;

    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|o| o.user_id == user.id));

    Ok(())
}

/// Tests the admin listing with a status label filter.
///
/// Expected: only matching orders; an unknown label is a BadRequest
#[tokio::test]
async fn admin_list_filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    factory::order::create_order(db, user.id, address.id).await?;
    factory::order::OrderFactory::new(db, user.id, address.id)
        .order_status("Gagal")
        .payment_status("Gagal")
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let service = service(db, &gateway, &notifier, 0);

    let failed = service
        .list_all(PageRequest::default(), Some("Gagal"))
        .await?;
    assert_eq!(failed.total_items, 1);
    assert_eq!(failed.items[0].state.order_status, OrderStatus::Failed);

    let everything = service.list_all(PageRequest::default(), None).await?;
    assert_eq!(everything.total_items, 2);

    assert!(matches!(
        service.list_all(PageRequest::default(), Some("Dikirim")).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
