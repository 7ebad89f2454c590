//! Stamp Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stamp, which
//! works out sensible author and vendor defaults for a project scaffolding
//! flow from local version-control metadata and the hosting provider.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            stamp-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (IdentityService)            │
//! │       Fallback chains, no failures      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │      (VcsReader, DirectoryClient)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stamp-adapters (Infrastructure)      │
//! │  (GitCliReader, GitHubDirectory, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (VendorInfo, ProviderHost, text forms)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stamp_core::{application::IdentityService, domain::ProviderHost};
//!
//! // Adapters come from stamp-adapters
//! let service = IdentityService::new(vcs, directory, ProviderHost::default());
//!
//! let author = service.resolve_author();
//! let vendor = service.resolve_vendor_info(&author.name, &author.handle).await;
//! println!("{} / {}", vendor.slug(), vendor.namespace());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        IdentityService,
        ports::{DirectoryClient, OrganizationProfile, VcsReader},
    };
    pub use crate::domain::{
        AuthorInfo, IdentityDefaults, ProviderHost, VcsIdentity, VendorInfo, namespace_form,
        slug, title_form,
    };
    pub use crate::error::{StampError, StampResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
