// ABOUTME: Custom error types for the imgsearch SDK with user-friendly messages
// ABOUTME: Distinguishes unreadable input, unreachable service, and changed service behavior

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Image file {} not found or unreadable", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Timeout: Upload took too long to complete")]
    Timeout,

    #[error("Unexpected response from upload endpoint (HTTP {status}): no redirect found")]
    UnexpectedResponse { status: u16 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),
}

impl SearchError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            SearchError::InputNotFound { .. } => Some("Check that the file exists and is readable"),
            SearchError::Transport { .. } => Some("Check your internet connection and try again"),
            SearchError::Timeout => Some("Try again or raise the timeout with --timeout"),
            SearchError::UnexpectedResponse { .. } => Some(
                "The search service may have changed how it answers uploads; the upload URL may need updating",
            ),
            SearchError::InvalidSignature(_) => {
                Some("Patterns are space separated hex bytes, with ?? for any byte (e.g. \"FF D8 ?? E0\")")
            }
            SearchError::Configuration(_) => None,
        }
    }

    /// Whether the failure came from the network rather than from the input or the service
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport { .. } | SearchError::Timeout)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Transport {
                message: err.to_string(),
                source: err,
            }
        }
    }
}
