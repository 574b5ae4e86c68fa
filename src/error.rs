//! Error types for team requests.
//!
//! Two kinds of failure exist:
//!
//! | Failure | Where it comes from |
//! |---------|---------------------|
//! | [`MissingRequiredField`] | Raised by [`Teams`](crate::Teams) before any request is built |
//! | [`InvalidIdentifier`] | An identifier that would collapse into a dot or empty path segment |
//! | Transport errors | Whatever the [`Transport`](crate::Transport) returns, passed through unchanged |
//!
//! [`Error`] is the error type of the bundled [`HttpTransport`](crate::HttpTransport).
//! Custom transports are free to use their own error type as long as it can be
//! built from both precondition failures.

use crate::client::{is_access_denied_status, is_retryable_status};
use thiserror::Error;

/// A required key was absent (or `null`) in a parameter bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required field: {0}")]
pub struct MissingRequiredField(pub &'static str);

impl MissingRequiredField {
    /// Name of the missing field.
    pub fn field(&self) -> &'static str {
        self.0
    }
}

/// An identifier that cannot stand as a single path segment.
///
/// Empty strings, `.` and `..` (in any percent-encoded spelling) would be
/// removed or resolved by URL normalization and address another resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// Errors produced by [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Error)]
pub enum Error {
    /// Precondition failure raised by the request builder
    #[error(transparent)]
    MissingRequiredField(#[from] MissingRequiredField),

    /// Identifier rejected before a path was built or resolved
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// Connection or protocol failure from the HTTP client
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-2xx status
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, lossily decoded
        body: String,
    },

    /// Request or response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A path could not be resolved against the base URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::Status { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Whether the server refused the credentials (401/403).
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Error::Status { status, .. } if is_access_denied_status(*status))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
