use super::*;

/// Tests that a deleted voucher can no longer be found by id but keeps its code reserved.
///
/// Expected: Ok(true), find_by_id None, find_by_code Some
#[tokio::test]
async fn hides_deleted_voucher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Voucher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let voucher = factory::voucher::VoucherFactory::new(db)
        .code("RAMADAN")
        .build()
        .await?;

    let repo = VoucherRepository::new(db);

    assert!(repo.soft_delete(voucher.id).await?);
    assert!(repo.find_by_id(voucher.id).await?.is_none());
    assert!(repo.find_by_code("RAMADAN").await?.is_some());

    Ok(())
}
