//! Search result projection over the ownership/content join.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of a search or listing: ownership attributes plus content size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FileSummary {
    /// Ownership record identifier.
    pub id: i64,
    /// The file name as uploaded.
    pub filename: String,
    /// Size of the referenced content in bytes.
    pub size_bytes: i64,
    /// MIME type declared at upload.
    pub mime_type: String,
    /// When the ownership record was created.
    pub created_at: DateTime<Utc>,
}
