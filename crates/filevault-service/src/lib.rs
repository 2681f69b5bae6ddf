//! # filevault-service
//!
//! Use cases over a user's files. Services receive their store at
//! construction time as an `Arc<dyn FileStore>` and take the caller's
//! identity as an explicit argument.

pub mod file;
pub mod storage;

pub use file::{SearchResult, SearchService};
pub use storage::StatsService;
