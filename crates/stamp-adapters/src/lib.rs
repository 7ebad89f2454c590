//! Infrastructure adapters for Stamp.
//!
//! This crate implements the ports defined in `stamp-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod directory;
pub mod vcs;

// Re-export commonly used adapters
pub use directory::{GitHubDirectory, OfflineDirectory, StaticDirectory};
pub use vcs::{GitCliReader, MemoryVcs};
