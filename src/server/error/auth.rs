use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token is unknown or has expired.
    #[error("Bearer token is invalid or expired")]
    InvalidToken,

    /// Token resolved to a user id that no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair does not match any user.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an admin code that is wrong, used or expired.
    #[error("Invalid admin code")]
    InvalidAdminCode,

    /// User lacks a required permission.
    ///
    /// # Fields
    /// - ID of the user
    /// - Description of the denied action, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` / `InvalidCredentials` → 401
/// - `InvalidAdminCode` / `AccessDenied` → 403
///
/// Client messages stay generic; details are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::InvalidAdminCode => (StatusCode::FORBIDDEN, "Invalid admin code"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
