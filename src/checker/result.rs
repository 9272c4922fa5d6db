// src/checker/result.rs
// =============================================================================
// What a single check produces.
//
// A CheckResult is either a success (status + message) or a failure carrying
// exactly one ErrorInfo. The ErrorInfo enum is closed: the reporter matches
// on it exhaustively, so adding a variant forces every consumer to handle it.
// =============================================================================

use crate::batch::Target;
use std::sync::Arc;
use thiserror::Error;

/// Status literal used for every failed check
pub const FAILED_STATUS: &str = "FAILED";

/// Why a check failed.
///
/// The Display output is the detail string that ends up in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorInfo {
    /// The target is missing, unreadable or unreachable
    #[error("open {location}: {cause}")]
    NotFound { location: String, cause: String },
    /// The target exists but what we got back is not what a valid target looks like
    #[error("parse error: {cause}")]
    ParseFailure { location: String, cause: String },
    /// Anything else
    #[error("error: {cause}")]
    Generic { cause: String },
}

impl ErrorInfo {
    pub fn not_found(location: impl Into<String>, cause: impl Into<String>) -> Self {
        ErrorInfo::NotFound {
            location: location.into(),
            cause: cause.into(),
        }
    }

    pub fn parse_failure(location: impl Into<String>, cause: impl Into<String>) -> Self {
        ErrorInfo::ParseFailure {
            location: location.into(),
            cause: cause.into(),
        }
    }

    pub fn generic(cause: impl Into<String>) -> Self {
        ErrorInfo::Generic {
            cause: cause.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The target this result is about
    pub target: Arc<Target>,
    /// "OK", a transport status line such as "200 OK", or "FAILED"
    pub status: String,
    /// Short human description of the outcome
    pub message: String,
    /// Present only when the check failed
    pub error: Option<ErrorInfo>,
}

impl CheckResult {
    pub fn success(target: Arc<Target>, status: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            target,
            status: status.into(),
            message: message.into(),
            error: None,
        }
    }

    pub fn failure(target: Arc<Target>, error: ErrorInfo) -> Self {
        CheckResult {
            target,
            status: FAILED_STATUS.to_string(),
            message: error.to_string(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ErrorInfo::not_found("/var/log/a.log", "No such file or directory");
        assert_eq!(err.to_string(), "open /var/log/a.log: No such file or directory");

        let err = ErrorInfo::parse_failure("/var/log/a.log", "invalid UTF-8");
        assert_eq!(err.to_string(), "parse error: invalid UTF-8");

        let err = ErrorInfo::generic("permission denied");
        assert_eq!(err.to_string(), "error: permission denied");
    }

    #[test]
    fn test_failure_sets_status_and_message() {
        let target = Arc::new(Target::file("a", "/x"));
        let result = CheckResult::failure(target, ErrorInfo::generic("boom"));
        assert!(!result.is_ok());
        assert_eq!(result.status, "FAILED");
        assert_eq!(result.message, "error: boom");
    }
}
