//! HTTP request handlers.

pub mod files;
pub mod health;
pub mod search;
pub mod stats;
