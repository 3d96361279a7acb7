//! Pagination cursor tracking
//!
//! `CursorManager` owns the offset and continuation token for one session. It
//! only moves forward; a new session gets a new manager.

use super::types::{Cursor, ResultPage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorManager {
    offset: usize,
    cursor: Option<Cursor>,
}

impl CursorManager {
    /// Start of a result set: offset 0, no cursor
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// Move past the previously requested page
    ///
    /// Returns the offset for the next request together with the cursor
    /// recorded from the last non-empty page.
    pub fn advance(&mut self, page_size: usize) -> (usize, Option<Cursor>) {
        self.offset = self.offset.saturating_add(page_size);
        (self.offset, self.cursor.clone())
    }

    /// Record a received page
    ///
    /// Non-empty pages replace the cursor with their `next_cursor`. Empty pages
    /// leave it untouched: emptiness signals exhaustion, not an invalid cursor.
    pub fn record_page(&mut self, page: &ResultPage) {
        if page.is_empty() {
            return;
        }
        if let Some(next) = &page.next_cursor {
            self.cursor = Some(next.clone());
        }
    }
}
