//! JWT claims structure carried by access tokens.

use serde::{Deserialize, Serialize};

use filevault_core::types::UserId;

/// Claim set embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The account the token was issued to.
    pub user_id: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Returns the user ID the token was issued to.
    pub fn user_id(&self) -> UserId {
        UserId(self.user_id)
    }
}
