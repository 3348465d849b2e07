use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Voucher::Table)
                    .if_not_exists()
                    .col(pk_auto(Voucher::Id))
                    .col(string_uniq(Voucher::Code))
                    .col(string(Voucher::Name))
                    .col(big_integer(Voucher::Discount))
                    .col(big_integer(Voucher::MinPurchase).default(0))
                    .col(timestamp_with_time_zone(Voucher::StartDate))
                    .col(timestamp_with_time_zone(Voucher::EndDate))
                    .col(
                        timestamp_with_time_zone(Voucher::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Voucher::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Voucher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Voucher {
    Table,
    Id,
    Code,
    Name,
    Discount,
    MinPurchase,
    StartDate,
    EndDate,
    CreatedAt,
    DeletedAt,
}
