//! Order domain models and parameters.
//!
//! An order is created once at checkout with its line details and totals frozen; only
//! its two statuses and payment fields change afterwards.

use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::DbErr;

use crate::{
    model::order::{CreateOrderDto, OrderDetailDto, OrderDto, OrderListItemDto},
    server::{
        error::AppError,
        model::{
            checkout::{CartItem, LineTotals, OrderTotals},
            order_status::{OrderState, OrderStatus},
        },
        util::pagination::PageRequest,
    },
};

/// How the customer pays for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Charged through the payment gateway; status driven by gateway callbacks.
    Midtrans,
    /// Manual bank transfer confirmed by an admin.
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Midtrans => "midtrans",
            Self::Transfer => "transfer",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "midtrans" => Some(Self::Midtrans),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }

    pub fn uses_gateway(&self) -> bool {
        matches!(self, Self::Midtrans)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetail {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_price: i64,
    pub total_discount: i64,
    pub total_exp: i64,
    pub total_gram_plastic: i64,
}

impl OrderDetail {
    pub fn into_dto(self) -> OrderDetailDto {
        OrderDetailDto {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price: self.total_price,
            total_discount: self.total_discount,
            total_exp: self.total_exp,
            total_gram_plastic: self.total_gram_plastic,
        }
    }

    pub fn from_entity(entity: entity::order_detail::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            product_id: entity.product_id,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            total_price: entity.total_price,
            total_discount: entity.total_discount,
            total_exp: entity.total_exp,
            total_gram_plastic: entity.total_gram_plastic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_code: String,
    pub user_id: i32,
    pub address_id: i32,
    pub voucher_id: Option<i32>,
    pub totals: OrderTotals,
    pub state: OrderState,
    pub payment_method: PaymentMethod,
    pub payment_token: Option<String>,
    pub payment_url: Option<String>,
    /// Empty when loaded by a listing query.
    pub details: Vec<OrderDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - Converted order
    /// - `Err(DbErr::Custom)` - Stored status or payment method label is unknown
    pub fn from_entity(
        entity: entity::order::Model,
        details: Vec<entity::order_detail::Model>,
    ) -> Result<Self, DbErr> {
        let state = OrderState::from_labels(&entity.order_status, &entity.payment_status)
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        let payment_method = PaymentMethod::from_label(&entity.payment_method).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown payment method '{}' stored for order {}",
                entity.payment_method, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            order_code: entity.order_code,
            user_id: entity.user_id,
            address_id: entity.address_id,
            voucher_id: entity.voucher_id,
            totals: OrderTotals {
                grand_total_quantity: entity.grand_total_quantity,
                grand_total_price: entity.grand_total_price,
                grand_total_discount: entity.grand_total_discount,
                grand_total_exp: entity.grand_total_exp,
                grand_total_gram_plastic: entity.grand_total_gram_plastic,
                shipment_fee: entity.shipment_fee,
                admin_fee: entity.admin_fee,
                total_payment: entity.total_payment,
            },
            state,
            payment_method,
            payment_token: entity.payment_token,
            payment_url: entity.payment_url,
            details: details.into_iter().map(OrderDetail::from_entity).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_code: self.order_code,
            user_id: self.user_id,
            address_id: self.address_id,
            voucher_id: self.voucher_id,
            grand_total_quantity: self.totals.grand_total_quantity,
            grand_total_price: self.totals.grand_total_price,
            grand_total_discount: self.totals.grand_total_discount,
            grand_total_exp: self.totals.grand_total_exp,
            grand_total_gram_plastic: self.totals.grand_total_gram_plastic,
            shipment_fee: self.totals.shipment_fee,
            admin_fee: self.totals.admin_fee,
            total_payment: self.totals.total_payment,
            order_status: self.state.order_status.to_string(),
            payment_status: self.state.payment_status.to_string(),
            payment_method: self.payment_method.as_str().to_string(),
            payment_token: self.payment_token,
            payment_url: self.payment_url,
            details: self.details.into_iter().map(|d| d.into_dto()).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_list_item_dto(self) -> OrderListItemDto {
        OrderListItemDto {
            id: self.id,
            order_code: self.order_code,
            user_id: self.user_id,
            grand_total_quantity: self.totals.grand_total_quantity,
            total_payment: self.totals.total_payment,
            order_status: self.state.order_status.to_string(),
            payment_status: self.state.payment_status.to_string(),
            payment_method: self.payment_method.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Checkout request after DTO conversion.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub address_id: i32,
    pub voucher_id: Option<i32>,
    pub payment_method: PaymentMethod,
    pub shipment_fee: i64,
    pub items: Vec<CartItem>,
}

impl CreateOrderParam {
    /// Converts the checkout DTO.
    ///
    /// # Returns
    /// - `Ok(CreateOrderParam)` - Converted parameters
    /// - `Err(AppError::BadRequest)` - Unknown payment method or negative shipment fee
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, AppError> {
        let payment_method = PaymentMethod::from_label(&dto.payment_method).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown payment method '{}'", dto.payment_method))
        })?;

        if dto.shipment_fee < 0 {
            return Err(AppError::BadRequest(
                "Shipment fee cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            address_id: dto.address_id,
            voucher_id: dto.voucher_id,
            payment_method,
            shipment_fee: dto.shipment_fee,
            items: dto
                .items
                .into_iter()
                .map(|i| CartItem {
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect(),
        })
    }
}

/// Fully priced order ready to be inserted.
#[derive(Debug, Clone)]
pub struct InsertOrderParam {
    pub order_code: String,
    pub user_id: i32,
    pub address_id: i32,
    pub voucher_id: Option<i32>,
    pub totals: OrderTotals,
    pub state: OrderState,
    pub payment_method: PaymentMethod,
    pub lines: Vec<LineTotals>,
}

/// Filters for order listings.
#[derive(Debug, Clone)]
pub struct GetOrdersParam {
    /// Restricts the listing to one customer's orders.
    pub user_id: Option<i32>,
    pub order_status: Option<OrderStatus>,
    pub page: PageRequest,
}

/// Generates a human-readable order code: `ORD-YYYYMMDD-XXXXXX`.
pub fn generate_order_code(now: DateTime<Utc>) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    const SUFFIX_LENGTH: usize = 6;

    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    format!("ORD-{}-{}", now.format("%Y%m%d"), suffix)
}
