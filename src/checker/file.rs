// src/checker/file.rs
// =============================================================================
// Probes a log file on the local filesystem.
//
// A file passes when:
// 1. It exists and is not a directory
// 2. It can be opened for reading
// 3. Its first chunk (up to 64 KiB) is valid UTF-8 text
//
// How failures are classified:
// - missing path              -> NotFound
// - a parent is not a dir     -> NotFound (the path can never exist)
// - directory / binary data   -> ParseFailure
// - any other I/O error       -> Generic (permission denied, ...)
//
// Rust concepts:
// - tokio::fs: async wrappers around blocking filesystem calls
// - AsyncReadExt::take: caps how many bytes a reader hands out
// - io::ErrorKind: portable classification of OS errors
// =============================================================================

use super::{ErrorInfo, Probe, OK_STATUS};
use std::io::ErrorKind;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

// How much of the file we look at to decide if it is text
const SNIFF_LEN: usize = 64 * 1024;

pub(super) async fn probe(location: &str) -> Result<Probe, ErrorInfo> {
    // Existence first: metadata fails cleanly on missing paths
    let metadata = tokio::fs::metadata(location)
        .await
        .map_err(|e| classify_io_error(location, e))?;

    if metadata.is_dir() {
        return Err(ErrorInfo::parse_failure(location, "is a directory, not a file"));
    }

    // Opening proves we are allowed to read it
    let file = File::open(location)
        .await
        .map_err(|e| classify_io_error(location, e))?;

    // Only the head of the file is read, however big the log is
    let mut head = Vec::with_capacity(SNIFF_LEN.min(metadata.len() as usize));
    file.take(SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .await
        .map_err(|e| classify_io_error(location, e))?;

    check_text(location, &head)?;

    Ok(Probe {
        status: OK_STATUS.to_string(),
        message: format!("readable ({} bytes)", metadata.len()),
    })
}

fn classify_io_error(location: &str, error: std::io::Error) -> ErrorInfo {
    match error.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => {
            ErrorInfo::not_found(location, error.to_string())
        }
        _ => ErrorInfo::generic(format!("{}: {}", location, error)),
    }
}

// A multi-byte character cut in half by the sniff window is still text
fn check_text(location: &str, head: &[u8]) -> Result<(), ErrorInfo> {
    match std::str::from_utf8(head) {
        Ok(_) => Ok(()),
        Err(e) if e.error_len().is_none() && head.len() == SNIFF_LEN => Ok(()),
        Err(e) => Err(ErrorInfo::parse_failure(
            location,
            format!("not a text file (invalid UTF-8 at byte {})", e.valid_up_to()),
        )),
    }
}
