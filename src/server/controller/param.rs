//! Query parameters shared by the listing endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::util::pagination::{PageRequest, DEFAULT_PER_PAGE};

fn default_page() -> i64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Page number, 1-based (default: 1). Out-of-range values are clamped.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

impl PaginationParam {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListParam {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Substring matched against name and email
    pub search: Option<String>,
}

impl UserListParam {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParam {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Substring matched against the product name
    pub search: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

impl ProductListParam {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListParam {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Order status label, e.g. `Proses`
    pub status: Option<String>,
}

impl OrderListParam {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}

/// Drops blank filter values so `?search=` behaves like no filter.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
