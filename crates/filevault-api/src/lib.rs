//! # filevault-api
//!
//! HTTP API layer for FileVault built on Axum.
//!
//! Provides the search, listing, and storage statistics endpoints, the
//! bearer-token middleware that guards them, CORS and request logging,
//! and the mapping from [`AppError`] to JSON error bodies.
//!
//! [`AppError`]: filevault_core::error::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
