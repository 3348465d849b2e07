use std::str::FromStr;
use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MIDTRANS_BASE_URL: &str = "https://app.sandbox.midtrans.com";
const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365;
const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Flat fee added to every order's total payment, in rupiah.
    pub admin_fee: i64,
    pub token_ttl_hours: u64,

    pub midtrans_server_key: String,
    pub midtrans_base_url: String,

    /// Optional endpoint receiving order notifications; logged only when unset.
    pub notification_webhook_url: Option<String>,
    pub http_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            admin_fee: parsed("ADMIN_FEE", 0)?,
            token_ttl_hours: parsed_at_most(
                "TOKEN_TTL_HOURS",
                DEFAULT_TOKEN_TTL_HOURS,
                MAX_TOKEN_TTL_HOURS,
            )?,
            midtrans_server_key: required("MIDTRANS_SERVER_KEY")?,
            midtrans_base_url: optional("MIDTRANS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_MIDTRANS_BASE_URL.to_string()),
            notification_webhook_url: optional("NOTIFICATION_WEBHOOK_URL"),
            http_timeout_seconds: parsed("HTTP_TIMEOUT_SECONDS", DEFAULT_HTTP_TIMEOUT_SECONDS)?,
        })
    }

    /// Lifetime of bearer tokens issued at login.
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_hours * 3600)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}

/// Like [`parsed`], rejecting values above `max`.
fn parsed_at_most(name: &str, default: u64, max: u64) -> Result<u64, ConfigError> {
    let value = parsed(name, default)?;
    if value > max {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    Ok(value)
}
