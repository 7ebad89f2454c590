//! Core domain layer for Stamp.
//!
//! Pure logic with no I/O: identity value types, provider conventions and
//! the string normalizer. Everything that touches processes or the network
//! goes through the ports in `crate::application::ports`.
//!
//! ## Rules
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: parsers take the raw text adapters hand back
//! - **Total functions**: text transforms and parsers never fail

pub mod error;
pub mod identity;
pub mod provider;
pub mod text;

pub use error::{DomainError, ErrorCategory};
pub use identity::{AuthorInfo, CommitRecord, IdentityDefaults, VcsIdentity, VendorInfo};
pub use provider::{ProviderHost, owner_segment};
pub use text::{namespace_form, slug, title_form};
