use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a listing.
///
/// `current_page` is already clamped into `1..=total_pages`, and `items` always belong
/// to that page. `next_page` equals `total_pages` on the last page and `prev_page` is 1
/// on the first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub next_page: u64,
    pub prev_page: u64,
    pub per_page: u64,
}
