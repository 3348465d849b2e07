//! Order and payment status lifecycle.
//!
//! An order carries two independent statuses, the fulfilment status and the payment
//! status, persisted as their Indonesian labels. Every trigger (gateway callback or admin
//! action) is expressed as an [`OrderEvent`] and applied through [`transition`], which
//! maps `(current state, event)` to the next state.
//!
//! The transition table has no guards: any event may move an order from any state,
//! including re-confirming an order that already failed.

use std::fmt;

use crate::server::error::internal::InternalError;

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order placed, no payment received yet.
    AwaitingPayment,
    /// Payment reported pending by the gateway.
    AwaitingConfirmation,
    /// Paid and being processed.
    Processing,
    /// Held for manual fraud review.
    Challenge,
    /// Cancelled, expired or rejected.
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingPayment => "Menunggu Pembayaran",
            Self::AwaitingConfirmation => "Menunggu Konfirmasi",
            Self::Processing => "Proses",
            Self::Challenge => "challenge",
            Self::Failed => "Gagal",
        }
    }

    /// Parses a stored status label.
    ///
    /// # Returns
    /// - `Some(OrderStatus)` - Known label
    /// - `None` - Label is not an order status
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Menunggu Pembayaran" => Some(Self::AwaitingPayment),
            "Menunggu Konfirmasi" => Some(Self::AwaitingConfirmation),
            "Proses" => Some(Self::Processing),
            "challenge" => Some(Self::Challenge),
            "Gagal" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    AwaitingConfirmation,
    Confirmed,
    Challenge,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingConfirmation => "Menunggu Konfirmasi",
            Self::Confirmed => "Konfirmasi",
            Self::Challenge => "challenge",
            Self::Failed => "Gagal",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Menunggu Konfirmasi" => Some(Self::AwaitingConfirmation),
            "Konfirmasi" => Some(Self::Confirmed),
            "challenge" => Some(Self::Challenge),
            "Gagal" => Some(Self::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of statuses an order is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderState {
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
}

impl OrderState {
    /// State of a freshly created order.
    pub fn initial() -> Self {
        Self {
            order_status: OrderStatus::AwaitingPayment,
            payment_status: PaymentStatus::AwaitingConfirmation,
        }
    }

    /// Reads the state from the stored status labels.
    ///
    /// # Returns
    /// - `Ok(OrderState)` - Both labels are known
    /// - `Err(InternalError::UnknownStatus)` - A stored label is not recognised
    pub fn from_labels(order_status: &str, payment_status: &str) -> Result<Self, InternalError> {
        let order = OrderStatus::from_label(order_status).ok_or_else(|| {
            InternalError::UnknownStatus {
                kind: "order",
                value: order_status.to_string(),
            }
        })?;
        let payment = PaymentStatus::from_label(payment_status).ok_or_else(|| {
            InternalError::UnknownStatus {
                kind: "payment",
                value: payment_status.to_string(),
            }
        })?;

        Ok(Self {
            order_status: order,
            payment_status: payment,
        })
    }
}

/// Something that happened to an order's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEvent {
    /// Gateway reports the payment captured and accepted, or settled.
    PaymentSettled,
    /// Gateway captured the payment but flagged it for fraud review.
    PaymentChallenged,
    /// Gateway reports the transaction cancelled or expired.
    PaymentFailed,
    /// Gateway denied this attempt; the customer may retry.
    PaymentDenied,
    /// Gateway reports the payment is waiting on the customer.
    PaymentPending,
    /// Admin confirmed the payment manually.
    AdminConfirmed,
    /// Admin cancelled the order.
    AdminCancelled,
}

impl OrderEvent {
    /// Translates a gateway transaction status into an event.
    ///
    /// # Arguments
    /// - `transaction_status` - Gateway transaction status (`capture`, `settlement`, ...)
    /// - `fraud_status` - Gateway fraud status, only consulted for `capture`
    ///
    /// # Returns
    /// - `Some(OrderEvent)` - Status the lifecycle reacts to
    /// - `None` - Status with no effect on the order (e.g. `refund`, or `capture` with
    ///   an unexpected fraud status)
    pub fn from_gateway(transaction_status: &str, fraud_status: Option<&str>) -> Option<Self> {
        match transaction_status {
            "capture" => match fraud_status {
                Some("accept") => Some(Self::PaymentSettled),
                Some("challenge") => Some(Self::PaymentChallenged),
                _ => None,
            },
            "settlement" => Some(Self::PaymentSettled),
            "cancel" | "expire" => Some(Self::PaymentFailed),
            "deny" => Some(Self::PaymentDenied),
            "pending" => Some(Self::PaymentPending),
            _ => None,
        }
    }
}

/// Applies an event to the current state.
pub fn transition(current: OrderState, event: OrderEvent) -> OrderState {
    match event {
        OrderEvent::PaymentSettled | OrderEvent::AdminConfirmed => OrderState {
            order_status: OrderStatus::Processing,
            payment_status: PaymentStatus::Confirmed,
        },
        OrderEvent::PaymentChallenged => OrderState {
            order_status: OrderStatus::Challenge,
            payment_status: PaymentStatus::Challenge,
        },
        OrderEvent::PaymentFailed | OrderEvent::AdminCancelled => OrderState {
            order_status: OrderStatus::Failed,
            payment_status: PaymentStatus::Failed,
        },
        OrderEvent::PaymentDenied => current,
        OrderEvent::PaymentPending => OrderState {
            order_status: OrderStatus::AwaitingConfirmation,
            payment_status: PaymentStatus::AwaitingConfirmation,
        },
    }
}
