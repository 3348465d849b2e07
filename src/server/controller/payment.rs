use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        payment::GatewayNotificationDto,
    },
    server::{controller::order::order_service, error::AppError, state::AppState},
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Receive a payment gateway notification.
///
/// Authenticated by the notification's SHA-512 signature rather than a bearer token.
/// Statuses the order lifecycle ignores are acknowledged with 200 so the gateway stops
/// retrying.
///
/// # Returns
/// - `200 OK` - Notification applied or ignored
/// - `401 Unauthorized` - Signature mismatch
/// - `404 Not Found` - No order with the notified code
#[utoipa::path(
    post,
    path = "/api/v1/payments/notification",
    tag = PAYMENT_TAG,
    request_body = GatewayNotificationDto,
    responses(
        (status = 200, description = "Notification processed", body = MessageDto),
        (status = 401, description = "Invalid signature", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn payment_notification(
    State(state): State<AppState>,
    Json(payload): Json<GatewayNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = order_service(&state)
        .handle_gateway_callback(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!(
                "Order {} is {} / {}",
                order.order_code, order.state.order_status, order.state.payment_status
            ),
        }),
    ))
}
