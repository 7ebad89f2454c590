//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "work out who the author is".

pub mod identity_service;

pub use identity_service::IdentityService;
