//! Per-user storage usage value object.

use serde::{Deserialize, Serialize};

/// Storage consumed by one user, with deduplication savings and quota usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageUsage {
    /// Bytes of distinct content referenced by the user's files.
    pub total_storage_used_bytes: i64,
    /// Bytes the user's files would occupy without deduplication.
    pub original_storage_used_bytes: i64,
    /// `original - total`.
    pub storage_savings_bytes: i64,
    /// Savings as a percentage of the original size (0.0 - 100.0).
    pub storage_savings_percentage: f64,
    /// Configured quota in mebibytes.
    pub storage_quota_mb: u64,
    /// Deduplicated usage as a percentage of the quota.
    pub quota_used_percentage: f64,
}

impl StorageUsage {
    /// Derive usage figures from the two byte totals and the quota.
    pub fn new(total_bytes: i64, original_bytes: i64, quota_mb: u64) -> Self {
        let savings = (original_bytes - total_bytes).max(0);
        let savings_percentage = if original_bytes > 0 {
            (savings as f64 / original_bytes as f64) * 100.0
        } else {
            0.0
        };
        let quota_bytes = quota_mb.saturating_mul(1024 * 1024);
        let quota_used_percentage = if quota_bytes == 0 {
            0.0
        } else {
            (total_bytes as f64 / quota_bytes as f64) * 100.0
        };

        Self {
            total_storage_used_bytes: total_bytes,
            original_storage_used_bytes: original_bytes,
            storage_savings_bytes: savings,
            storage_savings_percentage: savings_percentage,
            storage_quota_mb: quota_mb,
            quota_used_percentage,
        }
    }

    /// Check if the quota is exceeded.
    pub fn is_over_quota(&self) -> bool {
        self.quota_used_percentage >= 100.0
    }
}
