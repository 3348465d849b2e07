//! Order factory for creating test orders without going through checkout.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable statuses.
///
/// Defaults to a freshly created order: `Menunggu Pembayaran` / `Menunggu Konfirmasi`.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    address_id: i32,
    order_code: String,
    order_status: String,
    payment_status: String,
    total_payment: i64,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, address_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            address_id,
            order_code: format!("ORD-TEST-{:06}", id),
            order_status: "Menunggu Pembayaran".to_string(),
            payment_status: "Menunggu Konfirmasi".to_string(),
            total_payment: 10000,
        }
    }

    pub fn order_code(mut self, order_code: impl Into<String>) -> Self {
        self.order_code = order_code.into();
        self
    }

    pub fn order_status(mut self, order_status: impl Into<String>) -> Self {
        self.order_status = order_status.into();
        self
    }

    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    pub fn total_payment(mut self, total_payment: i64) -> Self {
        self.total_payment = total_payment;
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            order_code: ActiveValue::Set(self.order_code),
            user_id: ActiveValue::Set(self.user_id),
            address_id: ActiveValue::Set(self.address_id),
            voucher_id: ActiveValue::Set(None),
            grand_total_quantity: ActiveValue::Set(1),
            grand_total_price: ActiveValue::Set(self.total_payment),
            grand_total_discount: ActiveValue::Set(0),
            grand_total_exp: ActiveValue::Set(0),
            grand_total_gram_plastic: ActiveValue::Set(0),
            shipment_fee: ActiveValue::Set(0),
            admin_fee: ActiveValue::Set(0),
            total_payment: ActiveValue::Set(self.total_payment),
            order_status: ActiveValue::Set(self.order_status),
            payment_status: ActiveValue::Set(self.payment_status),
            payment_method: ActiveValue::Set("midtrans".to_string()),
            payment_token: ActiveValue::Set(None),
            payment_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order with default values.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    address_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, address_id).build().await
}
