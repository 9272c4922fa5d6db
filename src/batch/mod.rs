// src/batch/mod.rs
// =============================================================================
// This module owns the input batch: the list of targets to check.
//
// Submodules:
// - target: The Target type and its kind (file or URL)
// - load: Reads and validates the input JSON file
//
// The whole batch is loaded before anything is dispatched. If the file is
// unreadable or malformed we stop right there - no partial runs.
// =============================================================================

mod load;
mod target;

pub use load::load_targets;
pub use target::{Target, TargetKind};
