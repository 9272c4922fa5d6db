// src/report/export.rs
// =============================================================================
// Writes the report to disk as one complete JSON document.
//
// The JSON is built in memory first, written to a temporary file next to the
// destination, then renamed over it. Readers either see the old file or the
// whole new report, never half of one.
// =============================================================================

use super::entry::ReportEntry;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize report")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Pretty-printed JSON array of entries
pub fn to_json(entries: &[ReportEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

pub fn export_json(path: &Path, entries: &[ReportEntry]) -> Result<(), ExportError> {
    let json = to_json(entries)?;
    let write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(json.as_bytes()).map_err(write_error)?;
    file.write_all(b"\n").map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    debug!(path = %path.display(), entries = entries.len(), "report exported");
    Ok(())
}
