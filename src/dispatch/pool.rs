// src/dispatch/pool.rs
// =============================================================================
// Fan-out / fan-in over the targets of a batch.
//
// How it works:
// 1. Spawn one task per target (fan-out)
// 2. Push every task handle into a FuturesUnordered
// 3. Drain it into a Vec sized to the batch (fan-in)
//
// A task finishing never waits on us: its result sits in its JoinHandle until
// we poll it. We only return once every handle has resolved, so no result is
// lost and none is counted twice.
//
// Ordering: results come out in completion order, not input order.
//
// Rust concepts:
// - tokio::spawn: runs a future as an independent task on the runtime
// - JoinHandle: awaiting it gives Ok(output) or a JoinError (panic/cancel)
// - FuturesUnordered: polls many futures and yields each as it completes
// - Semaphore: hands out a fixed number of permits to limit parallelism
// =============================================================================

use crate::batch::Target;
use crate::checker::{CheckResult, Checker, ErrorInfo};
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::{debug, warn};

/// Checks every target with `checker` and returns one result per target.
pub async fn run_all(targets: Vec<Target>, checker: Checker) -> Vec<CheckResult> {
    let concurrency = checker.config().concurrency;
    run_with(targets, concurrency, move |target| {
        let checker = checker.clone();
        async move { checker.check(target).await }
    })
    .await
}

/// Same as [`run_all`] with the check itself supplied by the caller.
pub(super) async fn run_with<F, Fut>(
    targets: Vec<Target>,
    concurrency: Option<NonZeroUsize>,
    check: F,
) -> Vec<CheckResult>
where
    F: Fn(Arc<Target>) -> Fut,
    Fut: Future<Output = CheckResult> + Send + 'static,
{
    // Nothing to do: return before spawning anything
    if targets.is_empty() {
        return Vec::new();
    }

    let total = targets.len();

    // No limit by default; with one, each task waits for a permit first
    let limiter = concurrency.map(|n| Arc::new(Semaphore::new(n.get())));
    debug!(total, limit = ?concurrency, "dispatching checks");

    let mut pending = FuturesUnordered::new();

    // Fan-out: one task per target
    for target in targets {
        // The task reads the target, and we keep a handle on it in case the
        // task dies and we have to report the failure ourselves
        let target = Arc::new(target);
        let job = check(Arc::clone(&target));
        let limiter = limiter.clone();

        let handle = tokio::spawn(async move {
            // Held until the check is done; the semaphore is never closed
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };
            job.await
        });

        // Awaiting the handle never loses the target: a panic or cancellation
        // becomes a Generic error for this target alone
        pending.push(async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => {
                    warn!(id = %target.id, error = %e, "check task died");
                    CheckResult::failure(target, ErrorInfo::generic(describe_join_error(e)))
                }
            }
        });
    }

    // Fan-in: drain every handle, in whatever order they finish
    let mut results = Vec::with_capacity(total);
    while let Some(result) = pending.next().await {
        debug!(
            id = %result.target.id,
            ok = result.is_ok(),
            status = %result.status,
            message = %result.message,
            "check finished"
        );
        results.push(result);
    }

    debug!(total = results.len(), "all checks finished");
    results
}

fn describe_join_error(error: JoinError) -> String {
    if !error.is_panic() {
        return "check was cancelled".to_string();
    }

    // Panic payloads are usually a &str or a String (from format!)
    let payload = error.into_panic();
    let reason = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    format!("check panicked: {}", reason)
}
