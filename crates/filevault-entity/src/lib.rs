//! # filevault-entity
//!
//! Row models for FileVault. Ownership records (`user_files`) bind a user
//! to a named, typed file; content records (`physical_files`) hold the
//! size of deduplicated content keyed by hash. Database rows derive
//! `sqlx::FromRow`.

pub mod file;
pub mod storage;
