//! Bearer token middleware for protected routes.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use filevault_auth::CredentialSource;

use crate::error::ApiError;
use crate::extractors::{AuthUser, QueryValues};
use crate::state::AppState;

/// Headers and decoded query string of one request.
struct RequestCredentials<'a> {
    headers: &'a HeaderMap,
    query: QueryValues,
}

impl CredentialSource for RequestCredentials<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }
}

/// Authenticates the request and stores the caller as an [`AuthUser`]
/// extension. Rejected requests never reach the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let query = QueryValues::from_uri(request.uri());

    let outcome = {
        let credentials = RequestCredentials {
            headers: request.headers(),
            query,
        };
        state.authenticator.authenticate(&credentials)
    };

    match outcome {
        Ok(user_id) => {
            request.extensions_mut().insert(AuthUser(user_id));
            Ok(next.run(request).await)
        }
        Err(e) => {
            debug!(path = %request.uri().path(), reason = %e, "Rejected request");
            Err(e.into())
        }
    }
}
