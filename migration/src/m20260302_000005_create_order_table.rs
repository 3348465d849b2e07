use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_address_table::Address,
    m20260301_000004_create_voucher_table::Voucher,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string_uniq(Orders::OrderCode))
                    .col(integer(Orders::UserId))
                    .col(integer(Orders::AddressId))
                    .col(integer_null(Orders::VoucherId))
                    .col(integer(Orders::GrandTotalQuantity))
                    .col(big_integer(Orders::GrandTotalPrice))
                    .col(big_integer(Orders::GrandTotalDiscount))
                    .col(big_integer(Orders::GrandTotalExp))
                    .col(big_integer(Orders::GrandTotalGramPlastic))
                    .col(big_integer(Orders::ShipmentFee))
                    .col(big_integer(Orders::AdminFee))
                    .col(big_integer(Orders::TotalPayment))
                    .col(string(Orders::OrderStatus))
                    .col(string(Orders::PaymentStatus))
                    .col(string(Orders::PaymentMethod))
                    .col(string_null(Orders::PaymentToken))
                    .col(string_null(Orders::PaymentUrl))
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Orders::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Orders::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_address_id")
                            .from(Orders::Table, Orders::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_voucher_id")
                            .from(Orders::Table, Orders::VoucherId)
                            .to(Voucher::Table, Voucher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user_id")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    OrderCode,
    UserId,
    AddressId,
    VoucherId,
    GrandTotalQuantity,
    GrandTotalPrice,
    GrandTotalDiscount,
    GrandTotalExp,
    GrandTotalGramPlastic,
    ShipmentFee,
    AdminFee,
    TotalPayment,
    OrderStatus,
    PaymentStatus,
    PaymentMethod,
    PaymentToken,
    PaymentUrl,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
