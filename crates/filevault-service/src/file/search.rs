//! Filtered, paginated search over the caller's own files.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use filevault_core::result::AppResult;
use filevault_core::types::{PageInfo, PageRequest, SearchFilters, UserId};
use filevault_database::query::SearchQuery;
use filevault_database::repositories::FileStore;
use filevault_entity::file::FileSummary;

/// One page of matches plus the pagination block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matches on the requested page, newest first.
    pub files: Vec<FileSummary>,
    /// Position of this page within the full result set.
    pub pagination: PageInfo,
}

/// Search service scoped to a single owner per call.
#[derive(Clone)]
pub struct SearchService {
    /// Backing file store.
    store: Arc<dyn FileStore>,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService").finish()
    }
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Searches `owner`'s files.
    ///
    /// The total is counted first; if counting fails, no page is fetched.
    /// Both statements share the same predicate list, so `total_files` and
    /// the page always agree on what matched.
    pub async fn search(
        &self,
        owner: UserId,
        filters: SearchFilters,
        page: PageRequest,
    ) -> AppResult<SearchResult> {
        let query = SearchQuery::new(owner, filters);
        debug!(
            user_id = %owner,
            predicates = query.predicate_count(),
            page = page.page(),
            page_size = page.page_size(),
            "Searching files"
        );

        let total = self.store.count_files(&query).await.map_err(|e| {
            error!(user_id = %owner, error = ?e, "File count failed");
            e
        })?;

        let files = self.store.fetch_page(&query, &page).await.map_err(|e| {
            error!(user_id = %owner, error = ?e, "File page query failed");
            e
        })?;

        Ok(SearchResult {
            files,
            pagination: PageInfo::new(&page, total),
        })
    }

    /// Lists `owner`'s files without filters.
    pub async fn list(&self, owner: UserId, page: PageRequest) -> AppResult<SearchResult> {
        self.search(owner, SearchFilters::default(), page).await
    }
}
