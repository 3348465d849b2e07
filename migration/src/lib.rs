pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_address_table;
mod m20260301_000003_create_product_table;
mod m20260301_000004_create_voucher_table;
mod m20260302_000005_create_order_table;
mod m20260302_000006_create_order_detail_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_address_table::Migration),
            Box::new(m20260301_000003_create_product_table::Migration),
            Box::new(m20260301_000004_create_voucher_table::Migration),
            Box::new(m20260302_000005_create_order_table::Migration),
            Box::new(m20260302_000006_create_order_detail_table::Migration),
        ]
    }
}
