use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct OrderItemDto {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateOrderDto {
    pub address_id: i32,
    pub voucher_id: Option<i32>,
    /// `midtrans` to pay through the gateway, `transfer` for manual confirmation.
    pub payment_method: String,
    #[serde(default)]
    pub shipment_fee: i64,
    pub items: Vec<OrderItemDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OrderDetailDto {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_price: i64,
    pub total_discount: i64,
    pub total_exp: i64,
    pub total_gram_plastic: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_code: String,
    pub user_id: i32,
    pub address_id: i32,
    pub voucher_id: Option<i32>,
    pub grand_total_quantity: i32,
    pub grand_total_price: i64,
    pub grand_total_discount: i64,
    pub grand_total_exp: i64,
    pub grand_total_gram_plastic: i64,
    pub shipment_fee: i64,
    pub admin_fee: i64,
    pub total_payment: i64,
    pub order_status: String,
    pub payment_status: String,
    pub payment_method: String,
    pub payment_token: Option<String>,
    pub payment_url: Option<String>,
    pub details: Vec<OrderDetailDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OrderListItemDto {
    pub id: i32,
    pub order_code: String,
    pub user_id: i32,
    pub grand_total_quantity: i32,
    pub total_payment: i64,
    pub order_status: String,
    pub payment_status: String,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
}
