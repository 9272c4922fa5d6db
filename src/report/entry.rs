// src/report/entry.rs
// =============================================================================
// Classifies check results into report entries.
//
// The mapping is fixed:
//
//   outcome         status   message                                errorDetails
//   success         OK       "Analysis completed successfully"      ""
//   NotFound        FAILED   "File/target not found or unreadable"  "open <location>: <cause>"
//   ParseFailure    FAILED   "Parsing error"                        "parse error: <cause>"
//   Generic         FAILED   "Error during analysis"                "error: <cause>"
//
// to_report_entry has no failure path of its own and the same result always
// produces the same entry.
// =============================================================================

use crate::checker::{CheckResult, ErrorInfo};
use serde::{Deserialize, Serialize};

pub const MSG_SUCCESS: &str = "Analysis completed successfully";
pub const MSG_NOT_FOUND: &str = "File/target not found or unreadable";
pub const MSG_PARSE_FAILURE: &str = "Parsing error";
pub const MSG_GENERIC: &str = "Error during analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    Ok,
    Failed,
}

/// One line of the exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub id: String,
    pub location: String,
    pub status: ReportStatus,
    pub message: String,
    /// Empty unless the check failed
    pub error_details: String,
}

pub fn to_report_entry(result: &CheckResult) -> ReportEntry {
    let (status, message, error_details) = match &result.error {
        None => (ReportStatus::Ok, MSG_SUCCESS, String::new()),
        Some(error) => {
            let message = match error {
                ErrorInfo::NotFound { .. } => MSG_NOT_FOUND,
                ErrorInfo::ParseFailure { .. } => MSG_PARSE_FAILURE,
                ErrorInfo::Generic { .. } => MSG_GENERIC,
            };
            (ReportStatus::Failed, message, error.to_string())
        }
    };

    ReportEntry {
        id: result.target.id.clone(),
        location: result.target.location.clone(),
        status,
        message: message.to_string(),
        error_details,
    }
}

/// Console line for one result: `OK a (/var/log/a.log) : OK`
pub fn summary_line(result: &CheckResult) -> String {
    let target = &result.target;
    match &result.error {
        None => format!("OK {} ({}) : {}", target.id, target.location, result.status),
        Some(error) => format!("KO {} ({}) : {}", target.id, target.location, error),
    }
}

/// Totals over a finished report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub ok: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_entries(entries: &[ReportEntry]) -> Self {
        let ok = entries
            .iter()
            .filter(|e| e.status == ReportStatus::Ok)
            .count();
        Summary {
            total: entries.len(),
            ok,
            failed: entries.len() - ok,
        }
    }
}
