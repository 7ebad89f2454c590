//! Application layer errors.
//!
//! These describe why an adapter could not answer a query. The identity
//! service absorbs all of them; they exist so adapters can report *what*
//! went wrong in logs and so the CLI can surface them from diagnostics.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by port implementations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The external program could not be started (not installed, not on PATH).
    #[error("Command '{command}' is unavailable: {reason}")]
    CommandUnavailable { command: String, reason: String },

    /// The external program ran but exited unsuccessfully.
    #[error("Command '{command}' failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The external program produced output that could not be used.
    #[error("Command '{command}' produced unusable output: {reason}")]
    MalformedOutput { command: String, reason: String },

    /// The HTTP request did not complete.
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The HTTP request completed with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandUnavailable { command, .. } => vec![
                format!("'{}' was not found", command),
                "Ensure it is installed and on your PATH".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{}' exited with an error", command),
                "Run it by hand to see the full output".into(),
            ],
            Self::Transport { .. } => vec![
                "Check your network connection".into(),
                "Use --offline to skip the directory lookup".into(),
            ],
            Self::HttpStatus { status, .. } if *status == 403 => vec![
                "The API rate limit may be exhausted".into(),
                "Try again later or use --offline".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandUnavailable { .. } => ErrorCategory::Configuration,
            Self::HttpStatus { status: 404, .. } => ErrorCategory::NotFound,
            Self::CommandFailed { .. }
            | Self::MalformedOutput { .. }
            | Self::Transport { .. }
            | Self::HttpStatus { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_configuration() {
        let err = ApplicationError::CommandUnavailable {
            command: "gh".into(),
            reason: "not found".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions().iter().any(|s| s.contains("PATH")));
    }

    #[test]
    fn not_found_status_is_not_found() {
        let err = ApplicationError::HttpStatus {
            url: "https://api.github.com/orgs/x".into(),
            status: 404,
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(
            err.to_string(),
            "Request to https://api.github.com/orgs/x returned HTTP 404"
        );
    }

    #[test]
    fn rate_limit_suggests_offline() {
        let err = ApplicationError::HttpStatus {
            url: "u".into(),
            status: 403,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--offline")));
    }
}
