//! Custom Axum extractors.

pub mod auth;
pub mod pagination;
pub mod query;
pub mod search;

pub use auth::AuthUser;
pub use pagination::PaginationParams;
pub use query::QueryValues;
pub use search::SearchParams;
