//! HTTP handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts DTOs into params, calls one service and converts the domain result back.

pub mod address;
pub mod auth;
pub mod order;
pub mod param;
pub mod payment;
pub mod product;
pub mod user;
pub mod voucher;
