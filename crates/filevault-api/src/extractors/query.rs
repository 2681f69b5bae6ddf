//! Lenient query string extractor.

use std::collections::HashMap;
use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::Uri;
use axum::http::request::Parts;

/// Decoded query parameters, keeping the first value of a repeated key.
///
/// Never rejects: a query string that cannot be decoded yields no values,
/// and repeated keys are not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues(HashMap<String, String>);

impl QueryValues {
    /// Decodes the query string of `uri`.
    pub fn from_uri(uri: &Uri) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        let mut values = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            values.entry(key).or_insert(value);
        }
        Self(values)
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Removes and returns the value of `key`.
    pub fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

impl<S> FromRequestParts<S> for QueryValues
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}
