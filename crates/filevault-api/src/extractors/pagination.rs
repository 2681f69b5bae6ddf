//! Pagination query parameter extractor.

use filevault_core::types::PageRequest;

use super::query::QueryValues;

/// Query parameters for paginated endpoints.
///
/// Values are kept raw so that garbage falls back to the defaults instead
/// of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page, sent as `pageSize` (default: 20, max: 100).
    pub page_size: Option<String>,
}

impl From<&mut QueryValues> for PaginationParams {
    fn from(query: &mut QueryValues) -> Self {
        Self {
            page: query.take("page"),
            page_size: query.take("pageSize"),
        }
    }
}

impl PaginationParams {
    /// Converts to a normalized `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.page_size.as_deref())
    }
}
