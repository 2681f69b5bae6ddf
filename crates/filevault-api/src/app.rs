//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::middleware as axum_middleware;
use tower_http::trace::TraceLayer;
use tracing::info;

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_database::DatabasePool;
use filevault_database::repositories::FileRepository;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors)
}

/// Span for one request. The query string is not recorded since it may
/// carry an `auth` token.
fn request_span(request: &Request) -> tracing::Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}

/// Runs the FileVault server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig, db_pool: &DatabasePool) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let store = Arc::new(FileRepository::new(db_pool.pool().clone()));
    let app = build_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "FileVault server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received");
}
