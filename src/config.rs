// src/config.rs
// =============================================================================
// Run-wide settings for a batch of checks.
//
// CheckConfig is built once from the command line and then handed to the
// checker and the dispatcher. Nothing mutates it afterwards - every task gets
// its own clone.
// =============================================================================

use std::num::NonZeroUsize;
use std::time::Duration;

/// Default per-check time budget
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// How long a single probe may take before it counts as a failure
    pub timeout: Duration,
    /// Upper bound on checks in flight. `None` runs the whole batch at once.
    pub concurrency: Option<NonZeroUsize>,
}

impl CheckConfig {
    pub fn new(timeout: Duration) -> Self {
        CheckConfig {
            timeout,
            concurrency: None,
        }
    }

    pub fn with_concurrency(mut self, concurrency: Option<NonZeroUsize>) -> Self {
        self.concurrency = concurrency;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}
