//! Code-hosting provider conventions: host names, noreply addresses,
//! CLI session status lines and remote URL layouts.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Host name of the code-hosting provider, e.g. `github.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderHost(String);

impl ProviderHost {
    pub const DEFAULT: &'static str = "github.com";

    pub fn new(host: impl Into<String>) -> Result<Self, DomainError> {
        let host = host.into();
        let trimmed = host.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHost {
                host,
                reason: "host is empty".into(),
            });
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | ':' | '@'))
        {
            return Err(DomainError::InvalidHost {
                reason: format!("unexpected character '{bad}'"),
                host,
            });
        }

        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Email suffix the provider uses for private commit addresses,
    /// e.g. `@users.noreply.github.com`.
    pub fn noreply_suffix(&self) -> String {
        format!("@users.noreply.{}", self.0)
    }

    /// Extract the handle from `gh auth status` style output.
    ///
    /// Matches `ogged in to <host> as <handle>` followed by at least one
    /// more character, where `<handle>` is `[a-zA-Z_-]+`. When the handle
    /// ends the text, its last character is given up to satisfy the
    /// trailing `.+`. Returns an empty string when there is no match.
    pub fn session_handle(&self, status: &str) -> String {
        let pattern = format!(
            r"ogged in to {} as ([a-zA-Z_-]+).+",
            regex::escape(&self.0)
        );
        let Ok(re) = Regex::new(&pattern) else {
            return String::new();
        };

        re.captures(status)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for ProviderHost {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for ProviderHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProviderHost {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProviderHost {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderHost> for String {
    fn from(host: ProviderHost) -> Self {
        host.0
    }
}

/// Owner segment of a remote URL.
///
/// The first `:` becomes `/` so that `git@host:owner/repo.git` reads as
/// `git@host/owner/repo.git`, then segment 1 of the `/` split is returned.
/// Returns an empty string when the segment does not exist.
///
/// Note that `https://host/owner/repo` normalizes to `https//host/owner/repo`
/// whose segment 1 is empty.
pub fn owner_segment(remote_url: &str) -> String {
    remote_url
        .trim()
        .replacen(':', "/", 1)
        .split('/')
        .nth(1)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> ProviderHost {
        ProviderHost::default()
    }

    #[test]
    fn host_is_normalized() {
        let host = ProviderHost::new("  GitHub.com ").unwrap();
        assert_eq!(host.as_str(), "github.com");
    }

    #[test]
    fn host_rejects_empty_and_urls() {
        assert!(ProviderHost::new("").is_err());
        assert!(ProviderHost::new("https://github.com").is_err());
        assert!(ProviderHost::new("git hub.com").is_err());
    }

    #[test]
    fn host_deserializes_with_validation() {
        let ok: ProviderHost = serde_json::from_str("\"gitlab.example.org\"").unwrap();
        assert_eq!(ok.as_str(), "gitlab.example.org");
        assert!(serde_json::from_str::<ProviderHost>("\"a/b\"").is_err());
    }

    #[test]
    fn noreply_suffix_uses_host() {
        assert_eq!(github().noreply_suffix(), "@users.noreply.github.com");
    }

    #[test]
    fn session_handle_found() {
        let status = "github.com\n  ✓ Logged in to github.com as octo-cat (oauth_token)\n";
        assert_eq!(github().session_handle(status), "octo-cat");
    }

    #[test]
    fn session_handle_backtracks_into_trailing_char() {
        assert_eq!(
            github().session_handle("Logged in to github.com as octocat"),
            "octoca"
        );
        assert_eq!(github().session_handle("Logged in to github.com as o"), "");
    }

    #[test]
    fn session_handle_stops_at_digits() {
        let status = "Logged in to github.com as user42 (keyring)";
        assert_eq!(github().session_handle(status), "user");
    }

    #[test]
    fn session_handle_ignores_other_hosts() {
        let status = "Logged in to example.com as someone (token)";
        assert_eq!(github().session_handle(status), "");
    }

    #[test]
    fn session_handle_host_dot_is_literal() {
        let status = "Logged in to githubXcom as someone (token)";
        assert_eq!(github().session_handle(status), "");
    }

    #[test]
    fn session_handle_empty_status() {
        assert_eq!(github().session_handle(""), "");
    }

    #[test]
    fn owner_from_ssh_remote() {
        assert_eq!(owner_segment("git@github.com:acme/widgets.git"), "acme");
    }

    #[test]
    fn owner_from_https_remote_is_empty() {
        assert_eq!(owner_segment("https://github.com/acme/widgets.git"), "");
    }

    #[test]
    fn owner_from_scheme_less_remote() {
        assert_eq!(owner_segment("github.com/acme/widgets"), "acme");
    }

    #[test]
    fn owner_missing() {
        assert_eq!(owner_segment(""), "");
        assert_eq!(owner_segment("widgets"), "");
    }
}
