//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to the help-desk backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message extracted from the body, or the raw body.
        message: String,
    },

    /// Missing, expired, or rejected credentials (HTTP 401).
    #[error("unauthorized, run `hd auth login`")]
    Unauthorized,

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A local file (attachment, report) could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Whether the backend rejected the caller's session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
