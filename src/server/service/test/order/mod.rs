use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::payment::GatewayNotificationDto,
    server::{
        error::{notification::NotificationError, payment::PaymentError, AppError},
        model::{
            checkout::CartItem,
            order::{CreateOrderParam, PaymentMethod},
            order_status::{OrderStatus, PaymentStatus},
            user::User,
        },
        service::{
            notification::{OrderNotification, OrderNotifier},
            order::OrderService,
            payment::{expected_signature, ChargeRequest, ChargeResponse, PaymentGateway},
        },
        util::pagination::PageRequest,
    },
};

mod create;
mod list;
mod overrides;

const SERVER_KEY: &str = "test-server-key";

/// Gateway double recording every charge request.
#[derive(Default)]
struct FakeGateway {
    reject: bool,
    charges: Mutex<Vec<ChargeRequest>>,
}

impl FakeGateway {
    fn rejecting() -> Self {
        Self {
            reject: true,
            ..Default::default()
        }
    }

    fn charge_count(&self) -> usize {
        self.charges.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_charge(&self, request: ChargeRequest) -> Result<ChargeResponse, PaymentError> {
        let token = format!("token-{}", request.order_code);
        self.charges.lock().unwrap().push(request);

        if self.reject {
            return Err(PaymentError::GatewayRejected {
                status: 400,
                body: "rejected".to_string(),
            });
        }

        Ok(ChargeResponse {
            redirect_url: format!("https://pay.example.com/{}", token),
            token,
        })
    }
}

/// Notifier double keeping every notification it receives.
#[derive(Default)]
struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<OrderNotification>>,
}

impl RecordingNotifier {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn sent(&self) -> Vec<OrderNotification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderNotifier for RecordingNotifier {
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(notification);

        if self.fail {
            return Err(NotificationError::Status(503));
        }

        Ok(())
    }
}

fn service<'a>(
    db: &'a DatabaseConnection,
    gateway: &'a FakeGateway,
    notifier: &'a RecordingNotifier,
    admin_fee: i64,
) -> OrderService<'a> {
    OrderService::new(db, gateway, notifier, admin_fee, SERVER_KEY)
}

fn checkout(address_id: i32, method: PaymentMethod, items: Vec<(i32, i32)>) -> CreateOrderParam {
    CreateOrderParam {
        address_id,
        voucher_id: None,
        payment_method: method,
        shipment_fee: 0,
        items: items
            .into_iter()
            .map(|(product_id, quantity)| CartItem {
                product_id,
                quantity,
            })
            .collect(),
    }
}

fn signed_notification(
    order_code: &str,
    transaction_status: &str,
    fraud_status: Option<&str>,
) -> GatewayNotificationDto {
    let status_code = "200";
    let gross_amount = "10000.00";

    GatewayNotificationDto {
        order_id: order_code.to_string(),
        transaction_status: transaction_status.to_string(),
        fraud_status: fraud_status.map(str::to_string),
        status_code: status_code.to_string(),
        gross_amount: gross_amount.to_string(),
        signature_key: expected_signature(order_code, status_code, gross_amount, SERVER_KEY),
        payment_type: Some("bank_transfer".to_string()),
        transaction_id: None,
    }
}
