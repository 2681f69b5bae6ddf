//! File domain entities.

pub mod summary;

pub use summary::FileSummary;
