//! Data transfer objects exchanged with API clients.
//!
//! Every request and response body of the HTTP API is defined here. Server-side domain
//! models in `server::model` convert into these types at the controller boundary.

pub mod address;
pub mod api;
pub mod auth;
pub mod order;
pub mod pagination;
pub mod payment;
pub mod product;
pub mod user;
pub mod voucher;
