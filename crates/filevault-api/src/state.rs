//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use filevault_auth::{Authenticator, JwtDecoder};
use filevault_core::config::AppConfig;
use filevault_database::repositories::FileStore;
use filevault_service::{SearchService, StatsService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Request authenticator (extractor chain + JWT verification)
    pub authenticator: Arc<Authenticator>,
    /// File store, used directly only for health checks
    pub store: Arc<dyn FileStore>,
    /// Filtered file search
    pub search_service: Arc<SearchService>,
    /// Storage usage reporting
    pub stats_service: Arc<StatsService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("authenticator", &self.authenticator)
            .field("search_service", &self.search_service)
            .field("stats_service", &self.stats_service)
            .finish()
    }
}

impl AppState {
    /// Wires services around a store.
    pub fn new(config: AppConfig, store: Arc<dyn FileStore>) -> Self {
        let authenticator = Arc::new(Authenticator::new(JwtDecoder::new(&config.auth)));
        let search_service = Arc::new(SearchService::new(Arc::clone(&store)));
        let stats_service = Arc::new(StatsService::new(
            Arc::clone(&store),
            config.storage.quota_mb,
        ));

        Self {
            config: Arc::new(config),
            authenticator,
            store,
            search_service,
            stats_service,
        }
    }
}
