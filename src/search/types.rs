//! Data structures for search results and pagination tokens

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque ordering token attached to each hit by the search service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(String);

impl SortKey {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Continuation token sent back to the service as `sa`
///
/// Always derived from the sort key of the last hit of a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&SortKey> for Cursor {
    fn from(key: &SortKey) -> Self {
        Self(key.0.clone())
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single ranked search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Page title
    pub title: String,

    /// Page URL
    pub url: String,

    /// Matched excerpt; may contain inline `<b>` markup
    pub highlight_snippet: Option<String>,

    pub sort_key: SortKey,
}

/// One batch of hits returned by a single request
///
/// Consumed by the session controller immediately after it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,

    /// Cursor built from the last item's sort key, `None` for an empty page
    pub next_cursor: Option<Cursor>,
}

impl ResultPage {
    /// Build a page, deriving the continuation cursor from the last item
    #[must_use]
    pub fn new(items: Vec<ResultItem>) -> Self {
        let next_cursor = items.last().map(|item| Cursor::from(&item.sort_key));
        Self { items, next_cursor }
    }

    /// An empty page is the only exhaustion signal the service sends
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
