// src/dispatch/mod.rs
// =============================================================================
// This module runs a whole batch of checks concurrently.
//
// Features:
// - One tokio task per target, all started at once by default
// - Optional cap on checks in flight (semaphore)
// - Results collected in completion order, exactly one per target
// - A check that panics only fails its own target
// =============================================================================

mod pool;

pub use pool::run_all;
