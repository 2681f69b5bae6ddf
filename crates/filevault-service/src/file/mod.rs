//! File search and listing.

pub mod search;

pub use search::{SearchResult, SearchService};
