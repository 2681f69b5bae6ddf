//! JWT signature and expiry verification.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use filevault_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// HMAC algorithms accepted with the shared secret.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Verifies HMAC-signed tokens against the shared secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(config.jwt_secret.as_bytes(), config.leeway_seconds)
    }

    /// Creates a decoder from a raw secret and clock-skew leeway.
    pub fn from_secret(secret: &[u8], leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.validate_exp = true;
        validation.leeway = leeway_seconds;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Every failure (malformed token, bad signature, wrong algorithm,
    /// expired) maps to [`AuthError::InvalidOrExpiredToken`]; the specific
    /// cause is only logged.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    JwtErrorKind::ExpiredSignature => "expired",
                    JwtErrorKind::InvalidSignature => "bad signature",
                    JwtErrorKind::InvalidToken => "malformed",
                    JwtErrorKind::InvalidAlgorithm => "algorithm mismatch",
                    JwtErrorKind::MissingRequiredClaim(_) => "missing claim",
                    _ => "undecodable",
                };
                debug!(reason, "Token rejected");
                AuthError::InvalidOrExpiredToken
            })
    }
}
