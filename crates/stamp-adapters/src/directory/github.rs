//! GitHub REST API organization lookup.

use async_trait::async_trait;
use reqwest::{
    StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::{debug, info, instrument};

use stamp_core::{
    application::{
        ApplicationError,
        ports::{DirectoryClient, OrganizationProfile},
    },
    error::{StampError, StampResult},
};

/// Public GitHub API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Client identifier sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("stamp/", env!("CARGO_PKG_VERSION"));

/// Unauthenticated single-shot client for `GET /orgs/{owner}`.
///
/// No retries and no timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct GitHubDirectory {
    http: reqwest::Client,
    api_base_url: String,
}

impl GitHubDirectory {
    pub fn new(api_base_url: impl Into<String>, user_agent: &str) -> StampResult<Self> {
        Self::with_builder(api_base_url, user_agent, reqwest::Client::builder())
    }

    /// Like [`Self::new`], starting from a caller-supplied client builder
    /// (proxy, TLS or timeout settings).
    pub fn with_builder(
        api_base_url: impl Into<String>,
        user_agent: &str,
        builder: reqwest::ClientBuilder,
    ) -> StampResult<Self> {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| StampError::Configuration {
                message: format!("invalid user agent '{user_agent}': {e}"),
            })?,
        );

        let http = builder
            .default_headers(headers)
            .build()
            .map_err(|e| StampError::Configuration {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        info!(api_base_url = %api_base_url, "created GitHubDirectory");
        Ok(Self { http, api_base_url })
    }

    pub fn organization_url(&self, owner: &str) -> String {
        format!("{}/orgs/{}", self.api_base_url, owner)
    }

    /// Fetch the organization, reporting why it could not be fetched.
    #[instrument(skip(self))]
    pub async fn fetch_organization(&self, owner: &str) -> StampResult<OrganizationProfile> {
        let url = self.organization_url(owner);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApplicationError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ApplicationError::HttpStatus {
                url,
                status: status.as_u16(),
            }
            .into());
        }

        let body = resp.bytes().await.map_err(|e| ApplicationError::Transport {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let profile: OrganizationProfile =
            serde_json::from_slice(&body).map_err(|e| ApplicationError::MalformedOutput {
                command: format!("GET {url}"),
                reason: e.to_string(),
            })?;

        debug!(?profile, "fetched organization");
        Ok(profile)
    }
}

#[async_trait]
impl DirectoryClient for GitHubDirectory {
    async fn lookup_organization(&self, owner: &str) -> Option<OrganizationProfile> {
        match self.fetch_organization(owner).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                debug!(owner, error = %e, "organization lookup failed");
                None
            }
        }
    }
}
