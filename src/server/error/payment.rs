use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Callback signature does not match the expected SHA-512 digest.
    #[error("Payment notification signature mismatch")]
    InvalidSignature,

    /// Gateway answered a charge request with a non-success status.
    #[error("Payment gateway returned {status}: {body}")]
    GatewayRejected { status: u16, body: String },

    /// Charge request could not be sent or its response could not be decoded.
    #[error("Payment gateway request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSignature => {
                tracing::warn!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid signature".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Payment could not be processed".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
