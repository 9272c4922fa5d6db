// src/checker/http.rs
// =============================================================================
// This module checks URL targets with a single HTTP GET request.
//
// The response body is never read - only the status line matters.
//
// How outcomes are classified:
// - 2xx (after following up to 5 redirects)     -> success, status = "200 OK"
// - location is not an http(s) URL              -> ParseFailure
// - connection refused / DNS failure / timeout  -> NotFound
// - 404 Not Found, 410 Gone                     -> NotFound
// - any other status or transport error         -> Generic
//
// The overall time budget is enforced by the caller, so the client itself
// has no timeout.
//
// Rust concepts:
// - ? with map_err: convert each failure into our ErrorInfo as it happens
// - matches!: compact pattern test that returns a bool
// =============================================================================

use super::{ErrorInfo, Probe};
use reqwest::{Client, StatusCode};
use url::Url;

// Builds the client shared by every URL check in a batch
//
// One client means one connection pool, which is what makes checking many
// URLs on the same host cheap.
pub(super) fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
}

pub(super) async fn probe(client: &Client, location: &str) -> Result<Probe, ErrorInfo> {
    // A location that is not a URL at all is malformed input, not a dead host
    let url = Url::parse(location)
        .map_err(|e| ErrorInfo::parse_failure(location, format!("invalid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ErrorInfo::parse_failure(
            location,
            format!("unsupported URL scheme '{}'", url.scheme()),
        ));
    }

    // One GET; redirects are followed by the client
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| categorize_error(location, e))?;

    analyze_status(location, response.status())
}

// Turns the final status code into a probe outcome
fn analyze_status(location: &str, status: StatusCode) -> Result<Probe, ErrorInfo> {
    if status.is_success() {
        Ok(Probe {
            status: status_line(status),
            message: format!("HTTP {}", status.as_u16()),
        })
    } else if matches!(status, StatusCode::NOT_FOUND | StatusCode::GONE) {
        Err(ErrorInfo::not_found(location, format!("HTTP {}", status_line(status))))
    } else {
        Err(ErrorInfo::generic(format!("HTTP {}", status_line(status))))
    }
}

// "200 OK", or just "599" when the code has no canonical reason
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

fn categorize_error(location: &str, error: reqwest::Error) -> ErrorInfo {
    if error.is_timeout() || error.is_connect() {
        ErrorInfo::not_found(location, error.to_string())
    } else if error.is_redirect() {
        ErrorInfo::generic("too many redirects")
    } else {
        ErrorInfo::generic(error.to_string())
    }
}
