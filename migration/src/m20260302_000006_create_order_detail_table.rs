use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_product_table::Product, m20260302_000005_create_order_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderDetail::Id))
                    .col(integer(OrderDetail::OrderId))
                    .col(integer(OrderDetail::ProductId))
                    .col(integer(OrderDetail::Quantity))
                    .col(big_integer(OrderDetail::UnitPrice))
                    .col(big_integer(OrderDetail::TotalPrice))
                    .col(big_integer(OrderDetail::TotalDiscount))
                    .col(big_integer(OrderDetail::TotalExp))
                    .col(big_integer(OrderDetail::TotalGramPlastic))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_detail_order_id")
                            .from(OrderDetail::Table, OrderDetail::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_detail_product_id")
                            .from(OrderDetail::Table, OrderDetail::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_order_detail_order_product")
                            .col(OrderDetail::OrderId)
                            .col(OrderDetail::ProductId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderDetail {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    UnitPrice,
    TotalPrice,
    TotalDiscount,
    TotalExp,
    TotalGramPlastic,
}
