use super::*;

/// Tests that only vouchers inside their validity window are listed.
///
/// Creates an active, an expired and a not-yet-started voucher.
///
/// Expected: Ok with only the active voucher
#[tokio::test]
async fn lists_only_active_vouchers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Voucher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let active = factory::create_voucher(db).await?;
    factory::voucher::VoucherFactory::new(db)
        .start_date(now - Duration::days(10))
        .end_date(now - Duration::days(1))
        .build()
        .await?;
    factory::voucher::VoucherFactory::new(db)
        .start_date(now + Duration::days(1))
        .end_date(now + Duration::days(10))
        .build()
        .await?;

    let repo = VoucherRepository::new(db);
    let page = repo.get_active_paginated(now, PageRequest::default()).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, active.id);

    Ok(())
}
