//! Parameterized query construction.

pub mod search;

pub use search::{SearchQuery, SqlArg, Statement};
