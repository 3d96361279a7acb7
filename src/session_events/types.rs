//! Event type definitions for session notifications
//!
//! Every state transition of a search session is mirrored as one event so a
//! presentation layer can redraw without polling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::search::SearchError;

/// Events emitted by a search session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A fresh search was issued; previous results are gone
    SearchStarted {
        session_id: Uuid,
        generation: u64,
        term: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// A follow-up page was requested
    LoadMoreStarted {
        session_id: Uuid,
        generation: u64,
        offset: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// A non-empty page was appended to the results
    PageMerged {
        session_id: Uuid,
        generation: u64,
        added: usize,
        total: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// An empty page arrived; no further pages will be requested
    Exhausted {
        session_id: Uuid,
        generation: u64,
        total: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// The request failed; the session is in its error phase
    Failed {
        session_id: Uuid,
        generation: u64,
        error: SearchError,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// A response arrived for a session that has since been replaced
    StaleResponseDiscarded {
        response_generation: u64,
        current_generation: u64,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
    /// The session was discarded and the controller is idle again
    Cleared {
        generation: u64,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl SessionEvent {
    /// Generation the event belongs to
    #[must_use]
    pub fn generation(&self) -> u64 {
        match self {
            SessionEvent::SearchStarted { generation, .. }
            | SessionEvent::LoadMoreStarted { generation, .. }
            | SessionEvent::PageMerged { generation, .. }
            | SessionEvent::Exhausted { generation, .. }
            | SessionEvent::Failed { generation, .. }
            | SessionEvent::Cleared { generation, .. } => *generation,
            SessionEvent::StaleResponseDiscarded {
                current_generation, ..
            } => *current_generation,
        }
    }

    /// Whether the event ends an in-flight request
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionEvent::PageMerged { .. }
                | SessionEvent::Exhausted { .. }
                | SessionEvent::Failed { .. }
        )
    }
}
