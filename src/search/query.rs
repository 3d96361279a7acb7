//! Query normalization
//!
//! Turns raw user input into a `Query` or rejects it before any request is made.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::utils::MAX_QUERY_LENGTH;

/// A validated, trimmed, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    term: String,
}

impl Query {
    /// Normalize raw input into a query
    ///
    /// Trims surrounding whitespace. Returns `None` when nothing is left or the
    /// term exceeds `MAX_QUERY_LENGTH` characters; callers treat `None` as
    /// "do nothing", not as a failure.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            debug!("Rejected empty search query");
            return None;
        }

        let length = trimmed.chars().count();
        if length > MAX_QUERY_LENGTH {
            debug!(
                "Rejected search query of {} characters (max {})",
                length, MAX_QUERY_LENGTH
            );
            return None;
        }

        Some(Self {
            term: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.term)
    }
}
