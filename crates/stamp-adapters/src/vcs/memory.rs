//! In-memory version-control adapter for testing.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use stamp_core::{
    application::{ApplicationError, ports::VcsReader},
    error::StampResult,
};

/// In-memory [`VcsReader`] with canned answers.
///
/// Anything not configured behaves like a failed command.
#[derive(Debug, Clone, Default)]
pub struct MemoryVcs {
    inner: Arc<RwLock<MemoryVcsInner>>,
}

#[derive(Debug, Default)]
struct MemoryVcsInner {
    config: HashMap<String, String>,
    history: Option<String>,
    remote_url: Option<String>,
    session_status: Option<String>,
    history_patterns: Vec<String>,
}

impl MemoryVcs {
    /// Create an empty repository with no configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a config value (`user.name`, `user.email`, ...).
    pub fn with_config(self, key: &str, value: &str) -> Self {
        self.write().config.insert(key.into(), value.into());
        self
    }

    /// Set the history as `name:email` lines, oldest first.
    pub fn with_history<I, S>(self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.write().history = Some(joined);
        self
    }

    pub fn with_remote(self, url: &str) -> Self {
        self.write().remote_url = Some(url.into());
        self
    }

    pub fn with_session_status(self, status: &str) -> Self {
        self.write().session_status = Some(status.into());
        self
    }

    /// Author patterns passed to `read_history`, in call order.
    pub fn history_patterns(&self) -> Vec<String> {
        self.read().history_patterns.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryVcsInner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryVcsInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn not_configured(command: &str) -> stamp_core::error::StampError {
    ApplicationError::CommandFailed {
        command: command.into(),
        status: "exit status: 1".into(),
        stderr: String::new(),
    }
    .into()
}

impl VcsReader for MemoryVcs {
    fn read_config(&self, key: &str) -> StampResult<String> {
        self.read()
            .config
            .get(key)
            .cloned()
            .ok_or_else(|| not_configured(&format!("git config {key}")))
    }

    fn read_history(&self, author_pattern: &str) -> StampResult<String> {
        let mut inner = self.write();
        inner.history_patterns.push(author_pattern.to_string());
        inner
            .history
            .clone()
            .ok_or_else(|| not_configured("git log"))
    }

    fn read_remote_url(&self) -> StampResult<String> {
        self.read()
            .remote_url
            .clone()
            .ok_or_else(|| not_configured("git config remote.origin.url"))
    }

    fn read_session_status(&self, host: &str) -> StampResult<String> {
        self.read()
            .session_status
            .clone()
            .ok_or_else(|| not_configured(&format!("gh auth status -h {host}")))
    }
}
