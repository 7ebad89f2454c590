//! Identity Service - best-effort author and vendor inference.
//!
//! Author handle strategies, in priority order:
//! 1. Oldest noreply commit address authored under the local `user.name`
//! 2. Account reported by the provider CLI's auth status
//! 3. Owner segment of the `origin` remote URL
//!
//! Vendor identity comes from an organization lookup for the remote owner,
//! falling back to the author.
//!
//! Every operation here is infallible. Adapter errors are logged at debug
//! level and replaced with an empty string or the author fallback.

use tracing::{debug, instrument};

use crate::{
    application::ports::{DirectoryClient, VcsReader},
    domain::{
        AuthorInfo, CommitRecord, IdentityDefaults, ProviderHost, VcsIdentity, VendorInfo,
        owner_segment,
    },
    error::StampResult,
};

/// Service that derives scaffolding defaults from the local environment.
pub struct IdentityService {
    vcs: Box<dyn VcsReader>,
    directory: Box<dyn DirectoryClient>,
    host: ProviderHost,
}

impl IdentityService {
    /// Create a new identity service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stamp_core::{application::IdentityService, domain::ProviderHost};
    ///
    /// let service = IdentityService::new(
    ///     vcs,       // impl VcsReader
    ///     directory, // impl DirectoryClient
    ///     ProviderHost::default(),
    /// );
    /// let author = service.resolve_author();
    /// ```
    pub fn new(
        vcs: Box<dyn VcsReader>,
        directory: Box<dyn DirectoryClient>,
        host: ProviderHost,
    ) -> Self {
        Self {
            vcs,
            directory,
            host,
        }
    }

    pub fn host(&self) -> &ProviderHost {
        &self.host
    }

    /// Read `user.name` and `user.email`; each falls back to `""` on its own.
    #[instrument(skip_all)]
    pub fn read_vcs_identity(&self) -> VcsIdentity {
        VcsIdentity {
            name: or_empty("read user.name", self.vcs.read_config("user.name")),
            email: or_empty("read user.email", self.vcs.read_config("user.email")),
        }
    }

    /// Handle from the oldest noreply commit authored under `identity.name`.
    ///
    /// Bot authors are skipped, as are co-committers with other names.
    #[instrument(skip_all, fields(host = %self.host))]
    pub fn infer_handle_from_history(&self, identity: &VcsIdentity) -> String {
        let suffix = self.host.noreply_suffix();
        let raw = or_empty("read history", self.vcs.read_history(&suffix));

        let handle = CommitRecord::parse_all(&raw)
            .into_iter()
            .filter(|record| record.email.ends_with(&suffix))
            .find(|record| record.is_authored_by(&identity.name) && !record.is_bot())
            .map(|record| record.email_local_part().to_string())
            .unwrap_or_default();

        debug!(handle = %handle, "history strategy finished");
        handle
    }

    /// Handle of the account the provider CLI is logged in as.
    #[instrument(skip_all, fields(host = %self.host))]
    pub fn infer_handle_from_cli_session(&self) -> String {
        let status = or_empty(
            "read session status",
            self.vcs.read_session_status(self.host.as_str()),
        );
        let handle = self.host.session_handle(&status);

        debug!(handle = %handle, "session strategy finished");
        handle
    }

    /// Owner segment of the `origin` remote URL.
    #[instrument(skip_all)]
    pub fn infer_handle_from_remote_url(&self) -> String {
        let handle = owner_segment(&self.remote_url());

        debug!(handle = %handle, "remote strategy finished");
        handle
    }

    /// Run the handle strategies in order, stopping at the first non-empty one.
    #[instrument(skip_all)]
    pub fn resolve_author_handle(&self) -> String {
        let identity = self.read_vcs_identity();
        self.handle_for(&identity)
    }

    /// Author defaults: local identity plus the resolved handle.
    #[instrument(skip_all)]
    pub fn resolve_author(&self) -> AuthorInfo {
        let identity = self.read_vcs_identity();
        let handle = self.handle_for(&identity);

        AuthorInfo {
            name: identity.name,
            email: identity.email,
            handle,
        }
    }

    /// Vendor defaults for the organization owning the `origin` remote.
    ///
    /// Falls back to the author when there is no owner segment or the lookup
    /// yields nothing. A successful lookup overrides the display name and
    /// handle independently; a missing or empty field keeps the author value.
    #[instrument(skip(self))]
    pub async fn resolve_vendor_info(&self, author_name: &str, author_handle: &str) -> VendorInfo {
        let owner = owner_segment(&self.remote_url());
        if owner.is_empty() {
            debug!("no remote owner, vendor is the author");
            return VendorInfo::from_author(author_name, author_handle);
        }

        let Some(profile) = self.directory.lookup_organization(&owner).await else {
            debug!(owner = %owner, "no organization found, vendor is the author");
            return VendorInfo::from_author(author_name, author_handle);
        };

        let display_name = non_empty(profile.name)
            .unwrap_or_else(|| author_name.to_string());
        let handle = non_empty(profile.login)
            .unwrap_or_else(|| author_handle.to_string());

        debug!(owner = %owner, vendor = %display_name, "organization resolved");
        VendorInfo::new(display_name, handle)
    }

    /// Author defaults followed by vendor defaults derived from them.
    #[instrument(skip_all)]
    pub async fn resolve_defaults(&self) -> IdentityDefaults {
        let author = self.resolve_author();
        let vendor = self.resolve_vendor_info(&author.name, &author.handle).await;

        IdentityDefaults { author, vendor }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn handle_for(&self, identity: &VcsIdentity) -> String {
        let from_history = self.infer_handle_from_history(identity);
        if !from_history.is_empty() {
            return from_history;
        }

        let from_session = self.infer_handle_from_cli_session();
        if !from_session.is_empty() {
            return from_session;
        }

        self.infer_handle_from_remote_url()
    }

    fn remote_url(&self) -> String {
        or_empty("read remote url", self.vcs.read_remote_url())
    }
}

/// Collapse an adapter failure to the empty string.
fn or_empty(what: &str, result: StampResult<String>) -> String {
    result.unwrap_or_else(|e| {
        debug!(error = %e, "{what} failed");
        String::new()
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
