use thiserror::Error;

/// Domain error type.
///
/// Inference itself never fails; these errors only come from constructing
/// value types out of user-supplied configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid provider host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidHost { host, .. } => vec![
                format!("'{}' is not a bare host name", host),
                "Use a host name without scheme or path, e.g. github.com".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidHost { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
