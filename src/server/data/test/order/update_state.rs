use super::*;

/// Tests persisting a lifecycle state.
///
/// Expected: Ok(true) and both labels stored
#[tokio::test]
async fn persists_both_statuses() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_state(
            order.id,
            OrderState {
                order_status: OrderStatus::Processing,
                payment_status: PaymentStatus::Confirmed,
            },
        )
        .await?;

    assert!(updated);

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.order_status, "Proses");
    assert_eq!(stored.payment_status, "Konfirmasi");

    Ok(())
}

/// Tests that an unknown stored label surfaces as an error instead of a default.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address) = factory::helpers::create_customer_with_address(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, address.id)
        .order_status("Dikirim")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let result = repo.find_by_id(order.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
