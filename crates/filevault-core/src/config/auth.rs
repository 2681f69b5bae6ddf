//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token verification configuration.
///
/// FileVault only verifies tokens; issuance lives in the identity service
/// that shares this secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC-SHA256 verification key.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Clock skew tolerance in seconds applied to `exp`.
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            leeway_seconds: 0,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}
