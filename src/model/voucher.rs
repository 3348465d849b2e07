use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateVoucherDto {
    pub code: String,
    pub name: String,
    pub discount: i64,
    #[serde(default)]
    pub min_purchase: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct VoucherDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub discount: i64,
    pub min_purchase: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
