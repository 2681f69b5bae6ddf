//! Per-user storage accounting.

pub mod stats;

pub use stats::StatsService;
