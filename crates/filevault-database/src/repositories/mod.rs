//! Repository implementations for FileVault entities.

pub mod file;

pub use file::{FileRepository, FileStore};
