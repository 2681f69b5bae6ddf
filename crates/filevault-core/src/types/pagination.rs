//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size. Larger requests fall back to the default.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized pagination request.
///
/// Fields are private so every instance has passed through [`PageRequest::new`];
/// `page` is at least 1 and `page_size` is within `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPageRequest")]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

#[derive(Deserialize)]
struct RawPageRequest {
    #[serde(default)]
    page: i64,
    #[serde(default)]
    page_size: i64,
}

impl From<RawPageRequest> for PageRequest {
    fn from(raw: RawPageRequest) -> Self {
        Self::new(raw.page, raw.page_size)
    }
}

impl PageRequest {
    /// Create a new page request, replacing out-of-range values with defaults.
    ///
    /// A page below 1 becomes 1. A page size of 0 or above
    /// [`MAX_PAGE_SIZE`] becomes [`DEFAULT_PAGE_SIZE`] rather than being clamped.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = if page < 1 { 1 } else { page as u64 };
        let page_size = if page_size < 1 || page_size as u64 > MAX_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as u64
        };
        Self { page, page_size }
    }

    /// Build from raw query-string values. Absent or unparsable values
    /// take their defaults.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0);
        Self::new(parse(page), parse(page_size))
    }

    /// Page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of items per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination block returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Current page number (1-based), as requested after normalization.
    pub current_page: u64,
    /// Total number of pages; zero when nothing matched.
    pub total_pages: u64,
    /// Total number of matching items across all pages.
    pub total_files: u64,
}

impl PageInfo {
    /// Compute the pagination block for a request and a total count.
    ///
    /// Pages past the end are not clamped; they simply return no items.
    pub fn new(request: &PageRequest, total: u64) -> Self {
        Self {
            current_page: request.page(),
            total_pages: total.div_ceil(request.page_size().max(1)),
            total_files: total,
        }
    }
}
