//! Web operation error types

use thiserror::Error;

/// Errors returned by the page fetcher and the content extractor.
///
/// Every error is handed back to the immediate caller; nothing is retried
/// or suppressed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to fetch webpage: status code {status_code}")]
    Remote { status_code: u16 },

    #[error("Failed to read response body: {0}")]
    Io(String),

    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl WebError {
    /// Stable error code used when surfacing the error through a tool result
    pub fn code(&self) -> &'static str {
        match self {
            WebError::InvalidInput(_) => "INVALID_ARGUMENT",
            WebError::Network(_) => "NETWORK_ERROR",
            WebError::Remote { .. } => "REMOTE_ERROR",
            WebError::Io(_) => "IO_ERROR",
            WebError::Parse(_) => "PARSE_ERROR",
            WebError::Cancelled => "CANCELLED",
            WebError::Timeout(_) => "TIMEOUT",
        }
    }

    /// HTTP status code carried by a [`WebError::Remote`]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            WebError::Remote { status_code } => Some(*status_code),
            _ => None,
        }
    }

    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, WebError::Cancelled)
    }
}
