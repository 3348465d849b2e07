use super::*;

/// Tests pagination metadata over several pages.
///
/// Verifies that 5 users at 2 per page yield 3 pages and that page 2 links both ways.
///
/// Expected: Ok with 2 users on page 2, next 3 and prev 1
#[tokio::test]
async fn returns_requested_page_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let page = repo.get_all_paginated(None, PageRequest::new(2, 2)).await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.next_page, 3);
    assert_eq!(page.prev_page, 1);

    Ok(())
}

/// Tests that a page beyond the end is clamped and its items fetched.
///
/// Expected: Ok with current page 3 holding the single remaining user
#[tokio::test]
async fn clamps_page_beyond_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let page = repo.get_all_paginated(None, PageRequest::new(40, 2)).await?;

    assert_eq!(page.current_page, 3);
    assert_eq!(page.next_page, 3);
    assert_eq!(page.items.len(), 1);

    Ok(())
}

/// Tests listing with no users.
///
/// Expected: Ok with no items, zero pages and current page 1
#[tokio::test]
async fn returns_empty_page_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let page = repo.get_all_paginated(None, PageRequest::new(0, 10)).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.current_page, 1);

    Ok(())
}

/// Tests search by name or email and ordering by name.
///
/// Expected: Ok with only matching users, sorted alphabetically
#[tokio::test]
async fn filters_by_name_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Zaki")
        .email("zaki@toko.id")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Andi")
        .email("andi@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Rina Toko")
        .email("rina@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let page = repo
        .get_all_paginated(Some("toko"), PageRequest::default())
        .await?;

    let names: Vec<_> = page.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Rina Toko", "Zaki"]);
    assert_eq!(page.total_items, 2);

    Ok(())
}
