//! Response DTOs.

use serde::{Deserialize, Serialize};

use filevault_core::types::PageInfo;
use filevault_entity::file::FileSummary;
use filevault_service::SearchResult;

/// Body of `GET /search` and `GET /files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Files on this page.
    pub files: Vec<FileSummary>,
    /// Pagination block.
    pub pagination: PageInfo,
}

impl From<SearchResult> for FileListResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            files: result.files,
            pagination: result.pagination,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
}
