use super::*;

/// Tests a partial update.
///
/// Verifies provided fields change and absent ones keep their value.
///
/// Expected: Ok(Some) with new price and stock, unchanged name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Tote Bag")
        .price(15000)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(
            product.id,
            UpdateProductParam {
                price: Some(12000),
                stock: Some(7),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Tote Bag");
    assert_eq!(updated.price, 12000);
    assert_eq!(updated.stock, 7);

    Ok(())
}

/// Tests updating a missing product.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo.update(999, UpdateProductParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
