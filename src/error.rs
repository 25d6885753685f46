// src/error.rs
// =============================================================================
// The error kinds a run of access-guardian can end with.
//
// Every one of these is terminal: main prints a message and exits with
// status 1. There are no retries and no partial reports.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - Enums with data: Network/Unexpected carry the underlying message
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    /// No URL was given on the command line
    #[error("no URL supplied")]
    Usage,

    /// The fetch took longer than the request timeout
    #[error("Request timed out. The website took too long to respond.")]
    Timeout,

    /// Any other transport or HTTP status failure
    #[error("{0}")]
    Network(String),

    /// Anything that went wrong after the page was fetched
    #[error("{0}")]
    Unexpected(String),
}

impl AuditError {
    /// The line printed to stdout when the run ends with this error
    pub fn user_message(&self) -> String {
        match self {
            AuditError::Usage => "❌ Error: no URL supplied".to_string(),
            AuditError::Timeout => format!("❌ Error: {}", self),
            AuditError::Network(msg) => format!("❌ Error fetching page: {}", msg),
            AuditError::Unexpected(msg) => format!("❌ Unexpected error: {}", msg),
        }
    }
}

// Classifies reqwest failures into our two fetch error kinds.
// reqwest tells us directly whether the timeout fired, so we never
// have to sniff the error string.
impl From<reqwest::Error> for AuditError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AuditError::Timeout
        } else {
            AuditError::Network(error.to_string())
        }
    }
}
