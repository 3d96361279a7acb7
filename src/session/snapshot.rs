//! Read-only view of a session for presentation code

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::{Phase, SessionState};
use crate::search::{Cursor, ResultItem, SearchError};

/// Point-in-time copy of the session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub generation: u64,
    pub query: Option<String>,
    pub results: Vec<ResultItem>,
    pub offset: usize,
    pub cursor: Option<Cursor>,
    pub phase: Phase,
    pub last_error: Option<SearchError>,
    pub pages_loaded: usize,
}

impl From<&SessionState> for SessionSnapshot {
    fn from(state: &SessionState) -> Self {
        Self {
            session_id: state.session_id,
            generation: state.generation,
            query: state.query.as_ref().map(|q| q.term().to_string()),
            results: state.results.clone(),
            offset: state.cursor.offset(),
            cursor: state.cursor.cursor().cloned(),
            phase: state.phase,
            last_error: state.last_error.clone(),
            pages_loaded: state.pages_loaded,
        }
    }
}

impl SessionSnapshot {
    /// Main spinner: first page of a fresh search in flight
    #[must_use]
    pub fn is_loading_fresh(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// Bottom spinner: follow-up page in flight
    #[must_use]
    pub fn is_loading_more(&self) -> bool {
        self.phase == Phase::Appending
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.phase == Phase::Error
    }

    /// Whether the "load more" control should be enabled
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// A finished search that matched nothing
    ///
    /// Distinct from loading (spinner) and from failure (error message).
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        self.phase == Phase::Exhausted && self.results.is_empty()
    }
}
