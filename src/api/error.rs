//! Errors raised while talking to the search API.

use thiserror::Error;

/// Errors that can occur during an upstream request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Connection error for {path}: {message}")]
    Connection { path: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Search API returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Failed to parse response from {path}: {message}")]
    Parse { path: String, message: String },
}

impl ApiError {
    /// Whether the upstream resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}
