//! Application layer for Stamp.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (IdentityService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer. Parsing and naming
//! rules live in `crate::domain`; fallback order lives here.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::IdentityService;

// Re-export port traits (for adapter implementation)
pub use ports::{DirectoryClient, OrganizationProfile, VcsReader};

pub use error::ApplicationError;
