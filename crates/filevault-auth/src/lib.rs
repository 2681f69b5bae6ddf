//! # filevault-auth
//!
//! Bearer token verification for FileVault.
//!
//! ## Modules
//!
//! - `jwt` — claim set and HMAC signature/expiry verification
//! - `credentials` — ordered token extractors (header, query parameter)
//! - `authenticator` — extraction + verification yielding a [`UserId`]
//!
//! [`UserId`]: filevault_core::types::UserId

pub mod authenticator;
pub mod credentials;
pub mod error;
pub mod jwt;

pub use authenticator::Authenticator;
pub use credentials::{BearerHeader, CredentialSource, QueryParam, TokenExtractor};
pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder};
