// src/batch/target.rs
// =============================================================================
// A Target is one named thing to check: a log file on disk or a URL.
//
// Targets are immutable once loaded. The dispatcher wraps each one in an Arc
// so exactly one check task can read it while the report still refers to it.
// =============================================================================

use std::str::FromStr;

/// What kind of probe a target needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A local file, probed for existence and readable text
    File,
    /// A remote endpoint, probed with one HTTP GET
    Url,
}

impl FromStr for TargetKind {
    type Err = String;

    // Accepts the spellings found in real batch files ("log" is the
    // historical name for file targets)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "log" => Ok(TargetKind::File),
            "url" | "http" | "https" => Ok(TargetKind::Url),
            other => Err(format!("unknown target type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Unique within a batch, never empty
    pub id: String,
    /// A filesystem path or a URL, depending on `kind`
    pub location: String,
    pub kind: TargetKind,
}

impl Target {
    pub fn new(id: impl Into<String>, location: impl Into<String>, kind: TargetKind) -> Self {
        Target {
            id: id.into(),
            location: location.into(),
            kind,
        }
    }
}

#[cfg(test)]
impl Target {
    pub fn file(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(id, location, TargetKind::File)
    }

    pub fn url(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(id, location, TargetKind::Url)
    }
}
