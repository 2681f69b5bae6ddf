//! Search query parameters.

use filevault_core::types::{PageRequest, SearchFilters};

use super::pagination::PaginationParams;
use super::query::QueryValues;

/// Query string accepted by `GET /search`.
///
/// Filter values are passed through as strings; the store coerces numeric
/// and date bounds. The `auth` parameter is consumed by the middleware and
/// ignored here.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub filters: SearchFilters,
    pub pagination: PaginationParams,
}

impl From<QueryValues> for SearchParams {
    fn from(mut query: QueryValues) -> Self {
        let filters = SearchFilters {
            filename: query.take("filename"),
            mime_type: query.take("mime_type"),
            min_size_bytes: query.take("min_size_bytes"),
            max_size_bytes: query.take("max_size_bytes"),
            start_date: query.take("start_date"),
            end_date: query.take("end_date"),
        };

        Self {
            filters,
            pagination: PaginationParams::from(&mut query),
        }
    }
}

impl SearchParams {
    /// Splits into filters (empty values dropped) and a normalized page.
    pub fn into_parts(self) -> (SearchFilters, PageRequest) {
        (self.filters.normalized(), self.pagination.into_page_request())
    }
}
