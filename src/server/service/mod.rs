//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing checkout pricing, the order lifecycle and validation
//! - **Orchestration**: Coordinating repositories, the payment gateway and the notifier
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running checkout as a single database transaction

pub mod address;
pub mod auth;
pub mod notification;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;
pub mod voucher;

#[cfg(test)]
mod test;
