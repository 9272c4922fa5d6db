// src/batch/load.rs
// =============================================================================
// Loads the input batch from a JSON file.
//
// Expected format:
//   [
//     { "id": "app", "path": "/var/log/app.log", "type": "file" },
//     { "id": "api", "path": "https://example.com/health", "type": "url" }
//   ]
//
// Validation happens here, before any check runs:
// - ids must be non-empty and unique
// - paths must be non-empty
// - types must be one of the known kinds
// =============================================================================

use super::target::{Target, TargetKind};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Batch-level failures. Any of these aborts the run before dispatch.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON")]
    Json(#[from] serde_json::Error),
    #[error("entry #{index}: {reason}")]
    Invalid { index: usize, reason: String },
    #[error("duplicate target id '{0}'")]
    DuplicateId(String),
}

// One raw object from the input file, before validation
#[derive(Debug, Deserialize)]
struct InputTarget {
    id: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Reads and validates the whole batch file.
pub async fn load_targets(path: &Path) -> Result<Vec<Target>, LoadError> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let targets = parse_targets(&data)?;
    debug!(path = %path.display(), count = targets.len(), "loaded batch");
    Ok(targets)
}

/// Parses and validates a batch from its JSON text.
pub fn parse_targets(json: &str) -> Result<Vec<Target>, LoadError> {
    let raw: Vec<InputTarget> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut targets = Vec::with_capacity(raw.len());

    for (index, input) in raw.into_iter().enumerate() {
        if input.id.trim().is_empty() {
            return Err(LoadError::Invalid {
                index,
                reason: "id is empty".to_string(),
            });
        }
        if input.path.trim().is_empty() {
            return Err(LoadError::Invalid {
                index,
                reason: format!("path is empty for target '{}'", input.id),
            });
        }
        let kind: TargetKind = input
            .kind
            .parse()
            .map_err(|reason| LoadError::Invalid { index, reason })?;

        if !seen.insert(input.id.clone()) {
            return Err(LoadError::DuplicateId(input.id));
        }

        targets.push(Target::new(input.id, input.path, kind));
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_batch() {
        let json = r#"[
            {"id": "a", "path": "/tmp/exists.txt", "type": "file"},
            {"id": "b", "path": "https://example.com", "type": "url"}
        ]"#;
        let targets = parse_targets(json).unwrap();
        assert_eq!(
            targets,
            vec![
                Target::file("a", "/tmp/exists.txt"),
                Target::url("b", "https://example.com"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_targets("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_targets(r#"[{"id": "a""#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let err = parse_targets(r#"[{"id": "a", "path": "/x"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_empty_id() {
        let err = parse_targets(r#"[{"id": " ", "path": "/x", "type": "file"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let json = r#"[
            {"id": "a", "path": "/x", "type": "file"},
            {"id": "b", "path": "/y", "type": "socket"}
        ]"#;
        let err = parse_targets(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { index: 1, .. }));
        assert!(err.to_string().contains("socket"));
    }

    #[test]
    fn test_parse_rejects_duplicate_id() {
        let json = r#"[
            {"id": "a", "path": "/x", "type": "file"},
            {"id": "a", "path": "/y", "type": "file"}
        ]"#;
        let err = parse_targets(json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(ref id) if id == "a"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "a", "path": "/var/log/a.log", "type": "log"}}]"#).unwrap();

        let targets = load_targets(file.path()).await.unwrap();
        assert_eq!(targets, vec![Target::file("a", "/var/log/a.log")]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_targets(Path::new("/no/such/batch.json")).await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert_eq!(err.to_string(), "failed to read file /no/such/batch.json");
    }

    #[tokio::test]
    async fn test_error_chain_names_cause_once() {
        let err = load_targets(Path::new("/no/such/batch.json")).await.unwrap_err();
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("os error").count(), 1, "{}", chain);

        let err = parse_targets("[oops").unwrap_err();
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(!err.to_string().contains(&cause));
    }
}
