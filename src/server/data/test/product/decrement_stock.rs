use super::*;

/// Tests decrementing stock that covers the quantity.
///
/// Expected: Ok(true) and stock reduced
#[tokio::test]
async fn decrements_available_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(5)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(repo.decrement_stock(product.id, 5).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, 0);

    Ok(())
}

/// Tests that stock never goes below zero.
///
/// Expected: Ok(false) and stock unchanged
#[tokio::test]
async fn refuses_insufficient_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .stock(2)
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert!(!repo.decrement_stock(product.id, 3).await?);
    assert_eq!(repo.find_by_id(product.id).await?.unwrap().stock, 2);

    Ok(())
}
