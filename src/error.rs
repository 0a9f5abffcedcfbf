// src/error.rs
// =============================================================================
// Every way a validation run can fail, in one place.
//
// Only some of these errors are fatal:
// - Fetch, TableNotFound and InvalidConfig stop the run (nothing to validate)
// - Transport errors on individual links are turned into result rows by
//   checker::validate_link and never reach main()
// - Csv, Io, Utf8 and Json can only happen while writing the report
// =============================================================================

use std::fmt;

use thiserror::Error;

/// Errors produced while discovering, validating or reporting links
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The discovery page answered with something other than 200 OK
    #[error("Failed to fetch {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    /// The discovery page has no table with the configured id
    #[error("Table with ID \"{table_id}\" not found")]
    TableNotFound { table_id: String },

    /// No response could be received at all
    #[error("{kind} ({source})")]
    Transport {
        kind: TransportFailure,
        #[source]
        source: reqwest::Error,
    },

    /// A configuration value was rejected before the run started
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// reqwest errors already carry the URL they failed on
impl From<reqwest::Error> for ValidatorError {
    fn from(source: reqwest::Error) -> Self {
        ValidatorError::Transport {
            kind: TransportFailure::classify(&source),
            source,
        }
    }
}

/// Coarse classification of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    TooManyRedirects,
    Connect,
    InvalidUrl,
    Body,
    Other,
}

impl TransportFailure {
    // Most specific check first
    fn classify(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportFailure::Timeout
        } else if error.is_redirect() {
            TransportFailure::TooManyRedirects
        } else if error.is_builder() {
            TransportFailure::InvalidUrl
        } else if error.is_connect() {
            TransportFailure::Connect
        } else if error.is_body() || error.is_decode() {
            TransportFailure::Body
        } else {
            TransportFailure::Other
        }
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransportFailure::Timeout => "Request timed out",
            TransportFailure::TooManyRedirects => "Too many redirects",
            TransportFailure::Connect => "Connection failed",
            TransportFailure::InvalidUrl => "Invalid URL",
            TransportFailure::Body => "Failed to read response body",
            TransportFailure::Other => "Request failed",
        };
        f.write_str(text)
    }
}
