//! Session state and phases

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::search::{CursorManager, Query, ResultItem, SearchError};

/// Lifecycle phase of a search session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No session yet, or the session was cleared
    Idle,
    /// First page of a fresh search in flight
    Searching,
    /// Results present, more pages may exist
    Ready,
    /// Follow-up page in flight
    Appending,
    /// Last request failed; only a new search recovers
    Error,
    /// An empty page arrived; the result set is complete
    Exhausted,
}

impl Phase {
    /// A request is in flight
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Searching | Phase::Appending)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Searching => "searching",
            Phase::Ready => "ready",
            Phase::Appending => "appending",
            Phase::Error => "error",
            Phase::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// The controller's single piece of mutable state
///
/// Replaced wholesale by every fresh search; within a session `results` only
/// grows.
#[derive(Debug, Clone)]
pub(crate) struct SessionState {
    pub(crate) session_id: Uuid,
    pub(crate) generation: u64,
    pub(crate) query: Option<Query>,
    pub(crate) results: Vec<ResultItem>,
    pub(crate) cursor: CursorManager,
    pub(crate) phase: Phase,
    pub(crate) last_error: Option<SearchError>,
    pub(crate) pages_loaded: usize,
}

impl SessionState {
    /// Idle state with no query
    pub(crate) fn idle(generation: u64) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            generation,
            query: None,
            results: Vec::new(),
            cursor: CursorManager::new(),
            phase: Phase::Idle,
            last_error: None,
            pages_loaded: 0,
        }
    }

    /// Fresh session for `query`, first page about to be requested
    pub(crate) fn searching(query: Query, generation: u64) -> Self {
        Self {
            query: Some(query),
            phase: Phase::Searching,
            ..Self::idle(generation)
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle(0)
    }
}
