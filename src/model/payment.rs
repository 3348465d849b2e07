use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payment notification posted by the gateway.
///
/// Only the fields the order lifecycle reads are declared; the gateway sends many more,
/// which are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct GatewayNotificationDto {
    pub order_id: String,
    pub transaction_status: String,
    pub fraud_status: Option<String>,
    pub status_code: String,
    pub gross_amount: String,
    pub signature_key: String,
    pub payment_type: Option<String>,
    pub transaction_id: Option<String>,
}
