//! Token transports.
//!
//! A request exposes its headers and query parameters through
//! [`CredentialSource`]; each [`TokenExtractor`] knows how to pull a raw
//! token out of one transport. The authenticator tries them in order.

/// Read-only view of the parts of a request that may carry a token.
pub trait CredentialSource {
    /// Value of a request header, if present and valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Value of a decoded query parameter, if present.
    fn query_param(&self, name: &str) -> Option<&str>;
}

/// Pulls a raw token from one transport.
pub trait TokenExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the raw token, or `None` when this transport carries nothing.
    fn extract<'a>(&self, source: &'a dyn CredentialSource) -> Option<&'a str>;
}

/// `Authorization` header, with an optional `Bearer ` prefix.
///
/// An empty header counts as absent. `Bearer ` followed by nothing yields an
/// empty token, which then fails verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerHeader;

const BEARER_PREFIX: &str = "Bearer ";

impl TokenExtractor for BearerHeader {
    fn name(&self) -> &'static str {
        "authorization_header"
    }

    fn extract<'a>(&self, source: &'a dyn CredentialSource) -> Option<&'a str> {
        let value = source.header("authorization")?;
        if value.is_empty() {
            return None;
        }
        Some(value.strip_prefix(BEARER_PREFIX).unwrap_or(value))
    }
}

/// A named query parameter carrying the bare token.
#[derive(Debug, Clone)]
pub struct QueryParam {
    name: String,
}

impl QueryParam {
    /// Extract from the query parameter called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl TokenExtractor for QueryParam {
    fn name(&self) -> &'static str {
        "query_parameter"
    }

    fn extract<'a>(&self, source: &'a dyn CredentialSource) -> Option<&'a str> {
        source.query_param(&self.name).filter(|v| !v.is_empty())
    }
}
