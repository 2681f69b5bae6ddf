//! Authentication failures.

use thiserror::Error;

use filevault_core::error::AppError;

/// Why a request could not be authenticated.
///
/// The display text is the reason sent back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No token on any accepted transport.
    #[error("Authorization header is required")]
    MissingCredentials,
    /// The token failed to parse, its signature did not verify, or it expired.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::authentication(err.to_string())
    }
}
