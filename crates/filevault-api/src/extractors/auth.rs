//! `AuthUser` extractor: the caller resolved by the auth middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filevault_auth::AuthError;
use filevault_core::types::UserId;

use crate::error::ApiError;

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

impl AuthUser {
    /// Returns the caller's user ID.
    pub fn user_id(&self) -> UserId {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when `require_auth` ran for this route.
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| AuthError::MissingCredentials.into())
    }
}
