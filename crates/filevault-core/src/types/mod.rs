//! Core type definitions used across the FileVault workspace.

pub mod filter;
pub mod id;
pub mod pagination;

pub use filter::SearchFilters;
pub use id::UserId;
pub use pagination::{PageInfo, PageRequest};
