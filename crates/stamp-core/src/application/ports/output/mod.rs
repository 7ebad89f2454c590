//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stamp-adapters` crate provides implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StampResult;

/// Port for local version-control and provider-CLI queries.
///
/// One method per external query. Implementations return the raw, trimmed
/// text or an error; interpretation and fallback live in the service.
///
/// Implemented by:
/// - `stamp_adapters::vcs::GitCliReader` (production, spawns `git` / `gh`)
/// - `stamp_adapters::vcs::MemoryVcs` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait VcsReader: Send + Sync {
    /// Read a configuration value by dotted key, e.g. `user.name`.
    fn read_config(&self, key: &str) -> StampResult<String>;

    /// Read commit authors whose address matches `author_pattern`.
    ///
    /// One `name:email` pair per line, oldest commit first.
    fn read_history(&self, author_pattern: &str) -> StampResult<String>;

    /// Read the URL of the `origin` remote.
    fn read_remote_url(&self) -> StampResult<String>;

    /// Read the provider CLI's authentication status text for `host`.
    fn read_session_status(&self, host: &str) -> StampResult<String>;
}

/// Organization record returned by a directory lookup.
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
}

/// Port for looking up organizations on the hosting provider.
///
/// Implementations absorb every failure (transport, status, body) and
/// return `None`; there is no error channel.
///
/// Implemented by:
/// - `stamp_adapters::directory::GitHubDirectory` (production, REST API)
/// - `stamp_adapters::directory::OfflineDirectory` (never looks anything up)
/// - `stamp_adapters::directory::StaticDirectory` (testing)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Look up the organization named by `owner`.
    async fn lookup_organization(&self, owner: &str) -> Option<OrganizationProfile>;
}
