//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stamp-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `VcsReader`: version-control config, history, remote and CLI session queries
//!   - `DirectoryClient`: organization lookup on the hosting provider

pub mod output;

pub use output::{DirectoryClient, OrganizationProfile, VcsReader};

#[cfg(test)]
pub use output::{MockDirectoryClient, MockVcsReader};
