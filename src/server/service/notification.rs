//! Order notifications.
//!
//! Emitted after an order is committed or its state changes. Delivery is best effort:
//! callers log a failed notification and carry on.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::server::{error::notification::NotificationError, model::order::Order};

/// Event sent to the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OrderNotification {
    Created {
        order_id: i32,
        order_code: String,
        user_id: i32,
        total_payment: i64,
    },
    StatusChanged {
        order_id: i32,
        order_code: String,
        user_id: i32,
        order_status: String,
        payment_status: String,
    },
}

impl OrderNotification {
    pub fn created(order: &Order) -> Self {
        Self::Created {
            order_id: order.id,
            order_code: order.order_code.clone(),
            user_id: order.user_id,
            total_payment: order.totals.total_payment,
        }
    }

    pub fn status_changed(order: &Order) -> Self {
        Self::StatusChanged {
            order_id: order.id,
            order_code: order.order_code.clone(),
            user_id: order.user_id,
            order_status: order.state.order_status.to_string(),
            payment_status: order.state.payment_status.to_string(),
        }
    }
}

#[async_trait]
pub trait OrderNotifier: Send + Sync {
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError>;
}

/// Writes notifications to the log. Used when no webhook is configured.
pub struct LogNotifier;

#[async_trait]
impl OrderNotifier for LogNotifier {
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError> {
        tracing::info!(?notification, "Order notification");

        Ok(())
    }
}

/// Posts notifications as JSON to a configured URL.
pub struct WebhookNotifier {
    http_client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(http_client: Client, url: &str) -> Self {
        Self {
            http_client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl OrderNotifier for WebhookNotifier {
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&notification)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotificationError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
