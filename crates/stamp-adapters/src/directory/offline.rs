//! Directory adapter that never leaves the machine.

use async_trait::async_trait;
use tracing::debug;

use stamp_core::application::ports::{DirectoryClient, OrganizationProfile};

/// [`DirectoryClient`] that finds nothing, so vendor defaults always fall
/// back to the author.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineDirectory;

impl OfflineDirectory {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DirectoryClient for OfflineDirectory {
    async fn lookup_organization(&self, owner: &str) -> Option<OrganizationProfile> {
        debug!(owner, "offline, skipping organization lookup");
        None
    }
}
