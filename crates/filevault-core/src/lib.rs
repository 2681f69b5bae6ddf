//! # filevault-core
//!
//! Core crate for FileVault. Contains configuration schemas, typed
//! identifiers, search filter and pagination types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other FileVault crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
