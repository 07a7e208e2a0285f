//! Error types for Bookclub Core
//!
//! Only the fetch boundary can fail. Everything downstream of the CSV text
//! (tokenizing, header matching, normalizing) degrades to empty values instead.

use thiserror::Error;

/// Result type alias using BookclubError
pub type Result<T> = std::result::Result<T, BookclubError>;

/// Top-level error type for all Bookclub operations
#[derive(Debug, Error)]
pub enum BookclubError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Errors that occur while obtaining the CSV text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Response body is not valid text: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_body() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Network(err.to_string())
        }
    }
}
