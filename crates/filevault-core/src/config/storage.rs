//! Storage accounting configuration.

use serde::{Deserialize, Serialize};

/// Per-user storage accounting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage quota per user in mebibytes.
    #[serde(default = "default_quota_mb")]
    pub quota_mb: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            quota_mb: default_quota_mb(),
        }
    }
}

fn default_quota_mb() -> u64 {
    1024
}
