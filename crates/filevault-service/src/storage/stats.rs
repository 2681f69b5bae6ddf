//! Storage usage and deduplication savings.

use std::sync::Arc;

use tracing::{error, warn};

use filevault_core::result::AppResult;
use filevault_core::types::UserId;
use filevault_database::repositories::FileStore;
use filevault_entity::storage::StorageUsage;

/// Reports how much storage a user consumes against the configured quota.
#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn FileStore>,
    quota_mb: u64,
}

impl std::fmt::Debug for StatsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsService")
            .field("quota_mb", &self.quota_mb)
            .finish()
    }
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(store: Arc<dyn FileStore>, quota_mb: u64) -> Self {
        Self { store, quota_mb }
    }

    /// Usage for `owner`.
    pub async fn usage(&self, owner: UserId) -> AppResult<StorageUsage> {
        let (total, original) = self.store.storage_totals(owner).await.map_err(|e| {
            error!(user_id = %owner, error = ?e, "Storage usage query failed");
            e
        })?;

        let usage = StorageUsage::new(total, original, self.quota_mb);
        if usage.is_over_quota() {
            warn!(
                user_id = %owner,
                used_bytes = usage.total_storage_used_bytes,
                quota_mb = usage.storage_quota_mb,
                "User is over storage quota"
            );
        }
        Ok(usage)
    }
}
