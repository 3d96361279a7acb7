//! Error types for search operations
//!
//! This module defines the failures a page fetch can produce. They collapse onto
//! two kinds: the request could not complete, or the response did not have the
//! expected shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::ERROR_BODY_EXCERPT_CHARS;
use crate::utils::string_utils::safe_truncate_chars;

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Coarse classification shown to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Network unreachable, DNS failure, connection reset, non-2xx status
    Transport,
    /// Envelope or payload JSON does not match the expected shape
    MalformedResponse,
}

/// Error types for search operations
///
/// Payloads are plain strings so the error can be cloned into observable
/// session state and serialized with it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SearchError {
    /// The request could not be completed
    #[error("Search request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Search service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The outer response envelope could not be parsed
    #[error("Malformed search response envelope: {0}")]
    MalformedEnvelope(String),

    /// The JSON payload inside the envelope could not be parsed
    #[error("Malformed search payload: {0}")]
    MalformedPayload(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        let detail = if error.is_timeout() {
            "timed out"
        } else if error.is_connect() {
            "connection failed"
        } else {
            "transport error"
        };
        SearchError::Transport(format!("{detail}: {error}"))
    }
}

impl SearchError {
    /// Build a `Status` error from a non-success response body
    ///
    /// The service reports rejected requests as `{"msg": "..."}`; that message is
    /// used when present, otherwise a short excerpt of the raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("msg").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| {
                let excerpt = safe_truncate_chars(body.trim(), ERROR_BODY_EXCERPT_CHARS);
                if excerpt.is_empty() {
                    "empty response body".to_string()
                } else {
                    excerpt.to_string()
                }
            });

        SearchError::Status { status, message }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Transport(_) | SearchError::Status { .. } => ErrorKind::Transport,
            SearchError::MalformedEnvelope(_) | SearchError::MalformedPayload(_) => {
                ErrorKind::MalformedResponse
            }
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedResponse
    }

    /// Check if a caller-driven retry could plausibly succeed
    ///
    /// The client never retries on its own; this only informs callers that
    /// implement their own policy.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SearchError::Transport(_) => true,
            SearchError::Status { status, .. } => *status >= 500 || *status == 429,
            SearchError::MalformedEnvelope(_) | SearchError::MalformedPayload(_) => false,
        }
    }
}
