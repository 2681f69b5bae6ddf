//! Optional search filters over a user's files.

use serde::{Deserialize, Serialize};

/// Independently optional filters for a file search.
///
/// Numeric and date bounds are kept as the raw strings the caller sent;
/// the store coerces them when comparing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Case-insensitive filename substring.
    pub filename: Option<String>,
    /// Exact MIME type.
    pub mime_type: Option<String>,
    /// Inclusive lower bound on content size in bytes.
    pub min_size_bytes: Option<String>,
    /// Inclusive upper bound on content size in bytes.
    pub max_size_bytes: Option<String>,
    /// Inclusive lower bound on creation time.
    pub start_date: Option<String>,
    /// Inclusive upper bound on creation time.
    pub end_date: Option<String>,
}

impl SearchFilters {
    /// Drops empty values so that `?filename=` behaves like an absent filter.
    pub fn normalized(self) -> Self {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            filename: present(self.filename),
            mime_type: present(self.mime_type),
            min_size_bytes: present(self.min_size_bytes),
            max_size_bytes: present(self.max_size_bytes),
            start_date: present(self.start_date),
            end_date: present(self.end_date),
        }
    }

    /// Returns `true` when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.filename.is_none()
            && self.mime_type.is_none()
            && self.min_size_bytes.is_none()
            && self.max_size_bytes.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}
