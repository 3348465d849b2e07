use super::*;

fn all(page: PageRequest) -> GetProductsParam {
    GetProductsParam {
        search: None,
        category: None,
        page,
    }
}

/// Tests paging through products.
///
/// Verifies 100 products at 8 per page give 13 pages and that an out-of-range page is
/// clamped to the last one, which holds the remaining 4 products.
///
/// Expected: Ok with current page 13 and 4 items
#[tokio::test]
async fn clamps_to_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..100 {
        factory::create_product(db).await?;
    }

    let repo = ProductRepository::new(db);
    let page = repo.get_paginated(&all(PageRequest::new(15, 8))).await?;

    assert_eq!(page.total_items, 100);
    assert_eq!(page.total_pages, 13);
    assert_eq!(page.current_page, 13);
    assert_eq!(page.next_page, 13);
    assert_eq!(page.prev_page, 12);
    assert_eq!(page.items.len(), 4);

    Ok(())
}

/// Tests name search combined with the category filter.
///
/// Expected: Ok with the single product matching both
#[tokio::test]
async fn filters_by_search_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .name("Bamboo Straw")
        .category("kitchen")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Bamboo Toothbrush")
        .category("bathroom")
        .build()
        .await?;
    factory::product::ProductFactory::new(db)
        .name("Steel Straw")
        .category("kitchen")
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let page = repo
        .get_paginated(&GetProductsParam {
            search: Some("bamboo".to_string()),
            category: Some("kitchen".to_string()),
            page: PageRequest::default(),
        })
        .await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].name, "Bamboo Straw");

    Ok(())
}

/// Tests that deleted products are not listed.
///
/// Expected: Ok with one of two products
#[tokio::test]
async fn excludes_deleted_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::create_product(db).await?;
    factory::create_product(db).await?;

    let repo = ProductRepository::new(db);
    repo.soft_delete(deleted.id).await?;

    let page = repo.get_paginated(&all(PageRequest::default())).await?;

    assert_eq!(page.total_items, 1);
    assert_ne!(page.items[0].id, deleted.id);

    Ok(())
}
