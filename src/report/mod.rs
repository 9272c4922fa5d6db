// src/report/mod.rs
// =============================================================================
// This module turns check results into the user-facing report.
//
// Submodules:
// - entry: ReportEntry, the classification table and console lines
// - export: Writes the report to a JSON file
// =============================================================================

mod entry;
mod export;

pub use entry::{summary_line, to_report_entry, Summary};
pub use export::{export_json, to_json};
