//! FileVault Server: per-user file search and storage statistics.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use filevault_core::config::AppConfig;
use filevault_core::error::AppError;
use filevault_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `FILEVAULT_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FILEVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting FileVault");

    let db_pool = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        filevault_database::migration::run_migrations(db_pool.pool()).await?;
    }

    let result = filevault_api::run_server(config, &db_pool).await;
    db_pool.close().await;
    result
}
