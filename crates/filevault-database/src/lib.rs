//! # filevault-database
//!
//! PostgreSQL connection management, embedded migrations, the parameterized
//! search query builder, and the file repository.

pub mod connection;
pub mod migration;
pub mod query;
pub mod repositories;

pub use connection::DatabasePool;
pub use query::{SearchQuery, SqlArg, Statement};
pub use repositories::{FileRepository, FileStore};
