//! Page arithmetic shared by every paginated listing.
//!
//! Listings count their rows first, normalize the requested page against that count and
//! only then fetch, so the items returned always belong to the page that is reported.
//! Pages are 1-indexed; SeaORM's paginator is 0-indexed, see [`PageRequest::fetch_index`].

use crate::model::pagination::PageDto;

/// Default page size used when a listing request does not specify one.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Upper bound on the page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Raw page request as received from a client.
///
/// `page` may be any integer; values `<= 0` are treated as the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: u64,
}

impl PageRequest {
    /// Creates a page request, bounding `per_page` to `1..=MAX_PER_PAGE`.
    pub fn new(page: i64, per_page: u64) -> Self {
        Self {
            page,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Normalizes this request against the number of matching rows.
    ///
    /// # Returns
    /// - `(current_page, total_pages)` - see [`normalize`]
    pub fn normalize(&self, total_items: u64) -> (u64, u64) {
        normalize(self.page, total_items, self.per_page)
    }

    /// Row offset of a normalized page: `(current_page - 1) * per_page`.
    pub fn offset(&self, current_page: u64) -> u64 {
        Self::fetch_index(current_page) * self.per_page
    }

    /// Zero-indexed page number to hand to SeaORM's `Paginator::fetch_page`.
    pub fn fetch_index(current_page: u64) -> u64 {
        current_page.saturating_sub(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Normalizes a raw page number against a known item count.
///
/// `total_pages` is `ceil(total_items / per_page)`. A page `<= 0` becomes 1 and a page
/// beyond the last one is clamped to `total_pages`. With no items `total_pages` is 0 and
/// the current page stays at 1. A `per_page` of 0 is treated as 1.
///
/// # Arguments
/// - `page` - Requested page, any integer
/// - `total_items` - Number of rows matching the listing's filters
/// - `per_page` - Page size
///
/// # Returns
/// - `(current_page, total_pages)`
pub fn normalize(page: i64, total_items: u64, per_page: u64) -> (u64, u64) {
    let per_page = per_page.max(1);
    let total_pages = total_items.div_ceil(per_page);

    let mut current_page = if page <= 0 { 1 } else { page as u64 };
    if total_pages > 0 && current_page > total_pages {
        current_page = total_pages;
    }

    (current_page, total_pages)
}

/// Page to link as "next"; stays on the last page once reached.
pub fn next_page(current_page: u64, total_pages: u64) -> u64 {
    if current_page < total_pages {
        current_page + 1
    } else {
        total_pages
    }
}

/// Page to link as "previous"; never goes below 1.
pub fn prev_page(current_page: u64) -> u64 {
    if current_page > 1 {
        current_page - 1
    } else {
        1
    }
}

/// One page of a listing together with its navigation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub next_page: u64,
    pub prev_page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    /// Builds a page descriptor for items already fetched at `current_page`.
    ///
    /// `current_page` is re-normalized so a descriptor is consistent even when built
    /// from an unnormalized number.
    pub fn new(items: Vec<T>, current_page: u64, total_items: u64, per_page: u64) -> Self {
        let page = i64::try_from(current_page).unwrap_or(i64::MAX);
        let (current_page, total_pages) = normalize(page, total_items, per_page);

        Self {
            items,
            current_page,
            total_pages,
            total_items,
            next_page: next_page(current_page, total_pages),
            prev_page: prev_page(current_page),
            per_page: per_page.max(1),
        }
    }

    /// Converts the items of the page while keeping its metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            next_page: self.next_page,
            prev_page: self.prev_page,
            per_page: self.per_page,
        }
    }

    /// Fallible variant of [`Page::map`]; stops at the first conversion error.
    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<U>, E>>()?;

        Ok(Page {
            items,
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            next_page: self.next_page,
            prev_page: self.prev_page,
            per_page: self.per_page,
        })
    }
}

impl<T> From<Page<T>> for PageDto<T> {
    fn from(page: Page<T>) -> Self {
        PageDto {
            items: page.items,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            next_page: page.next_page,
            prev_page: page.prev_page,
            per_page: page.per_page,
        }
    }
}
