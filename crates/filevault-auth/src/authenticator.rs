//! Request authentication: find a token, verify it, yield the caller.

use tracing::debug;

use filevault_core::types::UserId;

use crate::credentials::{BearerHeader, CredentialSource, QueryParam, TokenExtractor};
use crate::error::AuthError;
use crate::jwt::JwtDecoder;

/// Query parameter accepted as a fallback token transport.
pub const AUTH_QUERY_PARAM: &str = "auth";

/// Resolves the calling user from request credentials.
///
/// Extractors are consulted in order and the first one that yields a token
/// wins; later transports are never looked at, even if the winning token
/// turns out to be invalid.
pub struct Authenticator {
    extractors: Vec<Box<dyn TokenExtractor>>,
    decoder: JwtDecoder,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.extractors.iter().map(|e| e.name()).collect();
        f.debug_struct("Authenticator")
            .field("extractors", &names)
            .finish()
    }
}

impl Authenticator {
    /// Header first, then the `auth` query parameter.
    pub fn new(decoder: JwtDecoder) -> Self {
        Self::with_extractors(
            decoder,
            vec![
                Box::new(BearerHeader),
                Box::new(QueryParam::new(AUTH_QUERY_PARAM)),
            ],
        )
    }

    /// Use a custom extractor chain.
    pub fn with_extractors(decoder: JwtDecoder, extractors: Vec<Box<dyn TokenExtractor>>) -> Self {
        Self {
            extractors,
            decoder,
        }
    }

    /// Returns the raw token from the first transport that carries one.
    pub fn extract_token<'a>(&self, source: &'a dyn CredentialSource) -> Option<&'a str> {
        self.extractors.iter().find_map(|extractor| {
            let token = extractor.extract(source)?;
            debug!(transport = extractor.name(), "Found bearer token");
            Some(token)
        })
    }

    /// Authenticates a request, returning the token's user ID.
    pub fn authenticate(&self, source: &dyn CredentialSource) -> Result<UserId, AuthError> {
        let token = self
            .extract_token(source)
            .ok_or(AuthError::MissingCredentials)?;

        let claims = self.decoder.decode(token)?;
        Ok(claims.user_id())
    }
}
