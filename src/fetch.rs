// src/fetch.rs
// =============================================================================
// This module downloads the page we are going to audit.
//
// Key functionality:
// - Adds https:// when the user typed a bare domain (example.com)
// - Makes exactly one HTTP GET with a fixed timeout and user agent
// - Turns every failure into one of two AuditError kinds: Timeout or Network
//
// No retries: a failed fetch ends the run.
// =============================================================================

use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::AuditError;

/// How long we wait for the whole request before giving up
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Some sites refuse requests without a browser-like user agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Accessibility Checker)";

// Adds a scheme when the user left it out
//
// Examples:
//   "example.com"          -> "https://example.com"
//   "http://example.com"   -> "http://example.com" (unchanged)
pub fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

// Fetches a page and returns the raw body bytes
//
// Parameters:
//   url: an absolute http(s) URL (run it through normalize_url first)
//
// Returns:
//   Ok(body) for any 2xx response
//   Err(AuditError::Timeout) when REQUEST_TIMEOUT elapses
//   Err(AuditError::Network) for bad URLs, connection errors and 4xx/5xx
pub async fn fetch_page(url: &str) -> Result<Vec<u8>, AuditError> {
    fetch_page_with_timeout(url, REQUEST_TIMEOUT).await
}

// Same as fetch_page, with the timeout given by the caller
pub async fn fetch_page_with_timeout(url: &str, timeout: Duration) -> Result<Vec<u8>, AuditError> {
    let parsed = Url::parse(url)
        .map_err(|e| AuditError::Network(format!("Invalid URL '{}': {}", url, e)))?;

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    debug!(url = %parsed, "sending GET");

    let response = client.get(parsed).send().await.map_err(classify)?;
    let status = response.status();
    debug!(status = status.as_u16(), "response received");

    // error_for_status turns 4xx/5xx into a reqwest::Error, which we then
    // classify exactly like a transport failure
    let response = response.error_for_status().map_err(classify)?;
    let body = response.bytes().await.map_err(classify)?;

    debug!(bytes = body.len(), "body downloaded");
    Ok(body.to_vec())
}

fn classify(error: reqwest::Error) -> AuditError {
    let kind = AuditError::from(error);
    debug!(error = %kind, timeout = matches!(kind, AuditError::Timeout), "fetch failed");
    kind
}
