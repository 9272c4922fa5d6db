// src/checker/mod.rs
// =============================================================================
// This module performs one check for one target.
//
// Submodules:
// - result: CheckResult and the ErrorInfo failure taxonomy
// - file: Probes a local file for existence and readable text
// - http: Probes a URL with a single GET request
//
// Every probe runs under the timeout from CheckConfig. A check never retries
// and never touches its target: the only side effect is the probe itself.
//
// Rust concepts:
// - Arc<Target>: shared, read-only ownership between a task and its result
// - tokio::time::timeout: wraps any future with a deadline
// - async blocks: build a future here, await it later
// =============================================================================

mod file;
mod http;
mod result;

pub use result::{CheckResult, ErrorInfo};

use crate::batch::{Target, TargetKind};
use crate::config::CheckConfig;
use reqwest::Client;
use std::sync::Arc;

/// Status literal for a successful file check
pub const OK_STATUS: &str = "OK";

// What a successful probe reports back
#[derive(Debug)]
struct Probe {
    status: String,
    message: String,
}

/// Everything a check needs: the run settings plus a shared HTTP client.
///
/// Cloning is cheap - the client is reference counted internally - so each
/// dispatched task gets its own copy.
#[derive(Debug, Clone)]
pub struct Checker {
    config: CheckConfig,
    client: Client,
}

impl Checker {
    pub fn new(config: CheckConfig) -> reqwest::Result<Self> {
        let client = http::build_client()?;
        Ok(Checker { config, client })
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Runs the probe for `target` and turns its outcome into a CheckResult.
    pub async fn check(&self, target: Arc<Target>) -> CheckResult {
        let timeout = self.config.timeout;

        // Pick the probe for this kind of target (nothing runs until awaited)
        let probe = async {
            match target.kind {
                TargetKind::File => file::probe(&target.location).await,
                TargetKind::Url => http::probe(&self.client, &target.location).await,
            }
        };

        // A probe that overruns its budget fails as unreachable
        let outcome = match tokio::time::timeout(timeout, probe).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ErrorInfo::not_found(
                target.location.as_str(),
                format!("timed out after {}ms", timeout.as_millis()),
            )),
        };

        match outcome {
            Ok(probe) => CheckResult::success(target, probe.status, probe.message),
            Err(error) => CheckResult::failure(target, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_check_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "line one\nline two\n").unwrap();
        let location = file.path().to_string_lossy().into_owned();

        let checker = Checker::new(CheckConfig::default()).unwrap();
        let result = checker.check(Arc::new(Target::file("a", location))).await;

        assert!(result.is_ok());
        assert_eq!(result.status, OK_STATUS);
        assert_eq!(result.target.id, "a");
    }

    #[tokio::test]
    async fn test_check_missing_file() {
        let checker = Checker::new(CheckConfig::default()).unwrap();
        let result = checker.check(Arc::new(Target::file("b", "/no/such/file"))).await;

        assert_eq!(result.status, "FAILED");
        assert!(matches!(
            result.error,
            Some(ErrorInfo::NotFound { ref location, .. }) if location == "/no/such/file"
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_file_times_out() {
        // Opening a FIFO for reading blocks until a writer shows up
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("stuck.log");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status().unwrap();
        assert!(status.success());

        let checker = Checker::new(CheckConfig::new(Duration::from_millis(200))).unwrap();
        let target = Arc::new(Target::file("stuck", fifo.to_string_lossy().into_owned()));
        let result = checker.check(target).await;

        // Release the blocked open so the runtime can shut down
        drop(std::fs::OpenOptions::new().write(true).open(&fifo).unwrap());

        assert_eq!(result.status, "FAILED");
        match result.error {
            Some(ErrorInfo::NotFound { cause, .. }) => assert_eq!(cause, "timed out after 200ms"),
            other => panic!("expected a timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_times_out() {
        // Accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let checker = Checker::new(CheckConfig::new(Duration::from_millis(200))).unwrap();
        let target = Arc::new(Target::url("slow", format!("http://{}/", addr)));
        let result = checker.check(target).await;

        assert!(!result.is_ok());
        match result.error {
            Some(ErrorInfo::NotFound { cause, .. }) => assert!(cause.contains("timed out after 200ms")),
            other => panic!("expected a timeout, got {:?}", other),
        }
    }
}
