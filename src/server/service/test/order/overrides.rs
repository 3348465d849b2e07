use super::*;

/// Tests an admin cancelling an already confirmed order.
///
/// Expected: (Gagal, Gagal)
#[tokio::test]
async fn cancel_fails_confirmed_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, address.id)
        .order_status("Proses")
        .payment_status("Konfirmasi")
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let cancelled = service(db, &gateway, &notifier, 0)
        .cancel_payment(order.id)
        .await?;

    assert_eq!(cancelled.state.order_status, OrderStatus::Failed);
    assert_eq!(cancelled.state.payment_status, PaymentStatus::Failed);
    assert_eq!(notifier.sent().len(), 1);

    Ok(())
}

/// Tests confirming an order that is already confirmed.
///
/// Expected: Ok with the same state and no notification
#[tokio::test]
async fn reconfirm_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, address.id)
        .order_status("Proses")
        .payment_status("Konfirmasi")
        .build()
        .await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let confirmed = service(db, &gateway, &notifier, 0)
        .confirm_payment(order.id)
        .await?;

    assert_eq!(confirmed.state.order_status, OrderStatus::Processing);
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests overriding a soft-deleted order.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn deleted_order_cannot_be_confirmed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let gateway = FakeGateway::default();
    let notifier = RecordingNotifier::default();
    let service = service(db, &gateway, &notifier, 0);
    service.delete(order.id).await?;

    let result = service.confirm_payment(order.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.delete(order.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
