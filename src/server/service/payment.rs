//! Payment gateway integration.
//!
//! Checkout reaches the gateway only through [`PaymentGateway`] so tests and alternative
//! providers can stand in for Midtrans. Gateway callbacks are authenticated with
//! [`verify_signature`] before they touch any order.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use crate::{model::payment::GatewayNotificationDto, server::error::payment::PaymentError};

/// Charge requested for a freshly created order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    pub order_code: String,
    pub gross_amount: i64,
    pub customer_name: String,
    pub customer_email: String,
}

/// Token and hosted payment page returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChargeResponse {
    pub token: String,
    pub redirect_url: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Requests a charge for an order.
    ///
    /// # Returns
    /// - `Ok(ChargeResponse)` - Gateway accepted the transaction
    /// - `Err(PaymentError::GatewayRejected)` - Gateway answered with a non-success status
    /// - `Err(PaymentError::Request)` - Network or decoding failure
    async fn create_charge(&self, request: ChargeRequest) -> Result<ChargeResponse, PaymentError>;
}

#[derive(Serialize)]
struct SnapTransaction<'a> {
    transaction_details: SnapTransactionDetails<'a>,
    customer_details: SnapCustomerDetails<'a>,
}

#[derive(Serialize)]
struct SnapTransactionDetails<'a> {
    order_id: &'a str,
    gross_amount: i64,
}

#[derive(Serialize)]
struct SnapCustomerDetails<'a> {
    first_name: &'a str,
    email: &'a str,
}

/// Midtrans Snap client.
pub struct MidtransGateway {
    http_client: Client,
    base_url: String,
    server_key: String,
}

impl MidtransGateway {
    pub fn new(http_client: Client, base_url: &str, server_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            server_key: server_key.to_string(),
        }
    }

    fn transactions_url(&self) -> String {
        format!("{}/snap/v1/transactions", self.base_url)
    }
}

#[async_trait]
impl PaymentGateway for MidtransGateway {
    async fn create_charge(&self, request: ChargeRequest) -> Result<ChargeResponse, PaymentError> {
        let body = SnapTransaction {
            transaction_details: SnapTransactionDetails {
                order_id: &request.order_code,
                gross_amount: request.gross_amount,
            },
            customer_details: SnapCustomerDetails {
                first_name: &request.customer_name,
                email: &request.customer_email,
            },
        };

        let response = self
            .http_client
            .post(self.transactions_url())
            .basic_auth(&self.server_key, None::<&str>)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::GatewayRejected {
                status: status.as_u16(),
                body,
            });
        }

        let charge = response.json::<ChargeResponse>().await?;

        tracing::info!(order_code = %request.order_code, "Created gateway charge");

        Ok(charge)
    }
}

/// Expected callback signature: hex `sha512(order_id + status_code + gross_amount + server_key)`.
pub fn expected_signature(
    order_id: &str,
    status_code: &str,
    gross_amount: &str,
    server_key: &str,
) -> String {
    let mut hasher = Sha512::new();
    hasher.update(order_id.as_bytes());
    hasher.update(status_code.as_bytes());
    hasher.update(gross_amount.as_bytes());
    hasher.update(server_key.as_bytes());

    hex::encode(hasher.finalize())
}

/// Checks a gateway callback against the server key.
///
/// # Returns
/// - `Ok(())` - Signature matches
/// - `Err(PaymentError::InvalidSignature)` - Signature missing or different
pub fn verify_signature(
    notification: &GatewayNotificationDto,
    server_key: &str,
) -> Result<(), PaymentError> {
    let expected = expected_signature(
        &notification.order_id,
        &notification.status_code,
        &notification.gross_amount,
        server_key,
    );

    let given = notification.signature_key.to_ascii_lowercase();

    if bool::from(expected.as_bytes().ct_eq(given.as_bytes())) {
        Ok(())
    } else {
        Err(PaymentError::InvalidSignature)
    }
}
