//! In-memory directory adapter for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;

use stamp_core::application::ports::{DirectoryClient, OrganizationProfile};

/// [`DirectoryClient`] backed by a fixed map of organizations.
///
/// Records every owner it is asked about.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    inner: Arc<RwLock<StaticDirectoryInner>>,
}

#[derive(Debug, Default)]
struct StaticDirectoryInner {
    organizations: HashMap<String, OrganizationProfile>,
    lookups: Vec<String>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an organization under `owner`.
    pub fn with_organization(self, owner: &str, name: Option<&str>, login: Option<&str>) -> Self {
        self.write().organizations.insert(
            owner.to_string(),
            OrganizationProfile {
                name: name.map(str::to_string),
                login: login.map(str::to_string),
            },
        );
        self
    }

    /// Owners looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.read().lookups.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, StaticDirectoryInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StaticDirectoryInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DirectoryClient for StaticDirectory {
    async fn lookup_organization(&self, owner: &str) -> Option<OrganizationProfile> {
        let mut inner = self.write();
        inner.lookups.push(owner.to_string());
        inner.organizations.get(owner).cloned()
    }
}
