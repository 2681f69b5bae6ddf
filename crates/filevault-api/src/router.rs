//! Route definitions for the FileVault HTTP API.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes.
///
/// Routes in [`protected_routes`] require a bearer token; the auth layer is
/// attached with `route_layer` so unknown paths still answer 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(protected_routes(state.clone()))
        .merge(health_routes())
        .with_state(state)
}

/// Search, listing, and usage endpoints for the authenticated caller
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search::search_files))
        .route("/files", get(handlers::files::list_files))
        .route("/stats", get(handlers::stats::storage_stats))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Liveness and database check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
