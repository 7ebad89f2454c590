//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STAMP_<SECTION>__<KEY>`, e.g. `STAMP_PROVIDER__HOST`
//! 3. Config file (`--config`, else [`AppConfig::config_path`] if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use stamp_adapters::directory::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use stamp_core::domain::ProviderHost;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Code-hosting provider settings.
    pub provider: ProviderConfig,
    /// Organization lookup settings.
    pub lookup: LookupConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Host used for noreply addresses and the CLI session query.
    pub host: ProviderHost,
    /// REST API root for organization lookups.
    pub api_base_url: String,
    /// Client identifier sent with API requests.
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// `false` behaves like passing `--offline` to every command.
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                host: ProviderHost::default(),
                api_base_url: DEFAULT_API_BASE_URL.into(),
                user_agent: DEFAULT_USER_AGENT.into(),
            },
            lookup: LookupConfig { enabled: true },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let default_path = Self::config_path();
        let (path, required) = match config_file {
            Some(path) => (path.as_path(), true),
            None => (default_path.as_path(), false),
        };
        Self::load_from(path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix("STAMP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stamp.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "returfs", "stamp")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".stamp.toml"))
    }
}
