//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token stores for bearer tokens and the one-time admin code
//! - Payment gateway and order notifier collaborators
//! - Pricing and token settings taken from configuration

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::service::{
    auth::token::TokenCache, notification::OrderNotifier, payment::PaymentGateway,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenCache` shares its map through an `Arc`
/// - gateway and notifier are `Arc` trait objects
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bearer token → user id, filled at login.
    pub tokens: TokenCache<i32>,

    /// One-time admin registration codes.
    pub admin_codes: TokenCache<()>,

    /// Charges orders paid through the gateway.
    pub gateway: Arc<dyn PaymentGateway>,

    /// Receives order created / status changed events.
    pub notifier: Arc<dyn OrderNotifier>,

    /// Flat fee added to every order, in rupiah.
    pub admin_fee: i64,

    /// Lifetime of bearer tokens.
    pub token_ttl: Duration,

    /// Key used to verify gateway callback signatures.
    pub midtrans_server_key: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token store
    /// - `admin_codes` - Admin code store, already holding the startup code if one was issued
    /// - `gateway` - Payment gateway client
    /// - `notifier` - Order notifier
    /// - `admin_fee` - Flat fee per order
    /// - `token_ttl` - Bearer token lifetime
    /// - `midtrans_server_key` - Gateway server key
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenCache<i32>,
        admin_codes: TokenCache<()>,
        gateway: Arc<dyn PaymentGateway>,
        notifier: Arc<dyn OrderNotifier>,
        admin_fee: i64,
        token_ttl: Duration,
        midtrans_server_key: String,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_codes,
            gateway,
            notifier,
            admin_fee,
            token_ttl,
            midtrans_server_key,
        }
    }
}
