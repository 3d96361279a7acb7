//! Search session controller
//!
//! Drives one result stream at a time: `search` starts a new session and fetches
//! its first page, `load_more` appends the next page. Both suspend only while the
//! backend request is in flight.
//!
//! # State machine
//! ```text
//! Idle ──search──► Searching ──page──► Ready ──load_more──► Appending ──page──► Ready
//!                      │   └─empty─► Exhausted                  ├─empty─► Exhausted
//!                      └─fail──► Error                          └─fail──► Error
//! ```
//! `search` is accepted from every non-busy phase and always starts over.
//!
//! # Concurrency
//! State lives behind one mutex that is never held across an await. Mutual
//! exclusion between requests comes from phase checks: while a request is in
//! flight, `search` and `load_more` are ignored. Each request carries the
//! session generation it was issued for; a response for an older generation is
//! dropped.
//!
//! # Cancellation
//! Dropping a `search` or `load_more` future before it resolves (a timeout, a
//! losing `select!` branch, an aborted task) ends that request as a transport
//! failure: the session moves to `Error`, so a new `search` is accepted again.

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::snapshot::SessionSnapshot;
use super::state::{Phase, SessionState};
use crate::config::SearchConfig;
use crate::search::{
    HttpSearchClient, PageRequest, Query, ResultPage, SearchBackend, SearchError, SearchResult,
};
use crate::session_events::{FilteredReceiver, SessionEvent, SessionEventBus};
use crate::utils::{DEFAULT_EVENT_CAPACITY, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Why an operation did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input normalized to nothing
    RejectedQuery,
    /// A request is already in flight
    Busy(Phase),
    /// `load_more` outside the `Ready` phase
    NotReady(Phase),
}

/// Effect of a controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The request completed and the session moved to this phase
    Applied(Phase),
    /// Nothing happened; state is unchanged
    Ignored(IgnoreReason),
    /// The response belonged to a session that was replaced while it was in flight
    Discarded {
        response_generation: u64,
        current_generation: u64,
    },
}

/// Which operation issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Fresh,
    Append,
}

/// Search session controller
///
/// Generic over the page source so it can run against [`HttpSearchClient`] or
/// any other [`SearchBackend`].
pub struct SearchSession<B> {
    backend: B,
    page_size: usize,
    state: Mutex<SessionState>,
    events: SessionEventBus,
}

impl SearchSession<HttpSearchClient> {
    /// Controller talking to the HTTP service described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &SearchConfig) -> anyhow::Result<Self> {
        let client = HttpSearchClient::new(config)?;
        Ok(Self::assemble(
            client,
            config.page_size(),
            config.event_capacity(),
        ))
    }
}

impl<B: SearchBackend> SearchSession<B> {
    /// Controller with default page size and event capacity
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::assemble(backend, DEFAULT_PAGE_SIZE, DEFAULT_EVENT_CAPACITY)
    }

    /// Controller with an explicit page size and event buffer
    ///
    /// # Errors
    ///
    /// Returns an error if `page_size` is outside `1..=MAX_PAGE_SIZE` or
    /// `event_capacity` is zero.
    pub fn with_options(backend: B, page_size: usize, event_capacity: usize) -> anyhow::Result<Self> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            anyhow::bail!("Page size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}");
        }
        if event_capacity == 0 {
            anyhow::bail!("Event capacity must be greater than zero");
        }
        Ok(Self::assemble(backend, page_size, event_capacity))
    }

    /// Values must already be validated
    fn assemble(backend: B, page_size: usize, event_capacity: usize) -> Self {
        Self {
            backend,
            page_size,
            state: Mutex::new(SessionState::default()),
            events: SessionEventBus::new(event_capacity),
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Start a new session for `raw` and fetch its first page
    ///
    /// Blank input is ignored without touching state. While a request is in
    /// flight the call is ignored as well. Otherwise the previous session,
    /// including any error, is discarded before the request is sent.
    pub async fn search(&self, raw: &str) -> Transition {
        let Some(query) = Query::normalize(raw) else {
            return Transition::Ignored(IgnoreReason::RejectedQuery);
        };

        let (generation, session_id, request) = {
            let mut state = self.state.lock();
            if state.phase.is_busy() {
                debug!("Ignoring search for '{}': {} in progress", query, state.phase);
                return Transition::Ignored(IgnoreReason::Busy(state.phase));
            }

            let generation = state.generation + 1;
            let request = PageRequest::first(query.term(), self.page_size);
            *state = SessionState::searching(query, generation);
            (generation, state.session_id, request)
        };

        info!("Starting search session {} for '{}'", session_id, request.term);
        self.events.publish(SessionEvent::SearchStarted {
            session_id,
            generation,
            term: request.term.clone(),
            timestamp: chrono::Utc::now(),
        });

        let in_flight = InFlight::new(self, generation, FetchKind::Fresh);
        let outcome = self.backend.fetch_page(request).await;
        in_flight.finish(outcome)
    }

    /// Fetch the next page of the current session and append it
    ///
    /// Only acts in the `Ready` phase: ignored while busy, after exhaustion,
    /// after an error and before the first search.
    pub async fn load_more(&self) -> Transition {
        let (generation, session_id, request) = {
            let mut state = self.state.lock();
            if state.phase != Phase::Ready {
                debug!("Ignoring load_more in phase {}", state.phase);
                let reason = if state.phase.is_busy() {
                    IgnoreReason::Busy(state.phase)
                } else {
                    IgnoreReason::NotReady(state.phase)
                };
                return Transition::Ignored(reason);
            }

            // Ready implies a query; guard anyway rather than panic
            let Some(term) = state.query.as_ref().map(|q| q.term().to_string()) else {
                return Transition::Ignored(IgnoreReason::NotReady(state.phase));
            };

            state.phase = Phase::Appending;
            let (offset, cursor) = state.cursor.advance(self.page_size);
            let request = PageRequest {
                term,
                offset,
                page_size: self.page_size,
                cursor,
            };
            (state.generation, state.session_id, request)
        };

        debug!(
            "Loading more for session {} at offset {}",
            session_id, request.offset
        );
        self.events.publish(SessionEvent::LoadMoreStarted {
            session_id,
            generation,
            offset: request.offset,
            timestamp: chrono::Utc::now(),
        });

        let in_flight = InFlight::new(self, generation, FetchKind::Append);
        let outcome = self.backend.fetch_page(request).await;
        in_flight.finish(outcome)
    }

    /// Discard the current session and return to `Idle`
    ///
    /// Allowed at any time. A request still in flight will have its response
    /// discarded when it arrives.
    pub fn clear(&self) -> Transition {
        let generation = {
            let mut state = self.state.lock();
            let generation = state.generation + 1;
            *state = SessionState::idle(generation);
            generation
        };

        debug!("Cleared search session (generation {})", generation);
        self.events.publish(SessionEvent::Cleared {
            generation,
            timestamp: chrono::Utc::now(),
        });
        Transition::Applied(Phase::Idle)
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(&*self.state.lock())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.state.lock().results.len()
    }

    /// Subscribe to state-change notifications
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Subscribe to the notifications accepted by `filter`
    pub fn subscribe_filtered<F>(&self, filter: F) -> FilteredReceiver<F>
    where
        F: Fn(&SessionEvent) -> bool + Send + Sync + 'static,
    {
        self.events.subscribe_filtered(filter)
    }

    /// Apply a finished request to the state it was issued for
    fn complete(
        &self,
        generation: u64,
        kind: FetchKind,
        outcome: SearchResult<ResultPage>,
    ) -> Transition {
        let timestamp = chrono::Utc::now();
        let (transition, event) = {
            let mut state = self.state.lock();

            if state.generation != generation {
                warn!(
                    "Discarding response for generation {} (current generation {})",
                    generation, state.generation
                );
                let current_generation = state.generation;
                drop(state);
                self.events.publish(SessionEvent::StaleResponseDiscarded {
                    response_generation: generation,
                    current_generation,
                    timestamp,
                });
                return Transition::Discarded {
                    response_generation: generation,
                    current_generation,
                };
            }

            let session_id = state.session_id;
            match outcome {
                Ok(page) if page.is_empty() => {
                    state.phase = Phase::Exhausted;
                    let total = state.results.len();
                    info!(
                        "Session {} exhausted after {} results ({:?})",
                        session_id, total, kind
                    );
                    (
                        Transition::Applied(Phase::Exhausted),
                        SessionEvent::Exhausted {
                            session_id,
                            generation,
                            total,
                            timestamp,
                        },
                    )
                }
                Ok(page) => {
                    state.cursor.record_page(&page);
                    let added = page.len();
                    state.results.extend(page.items);
                    state.pages_loaded += 1;
                    state.phase = Phase::Ready;
                    let total = state.results.len();
                    info!(
                        "Session {} merged {} results ({} total)",
                        session_id, added, total
                    );
                    (
                        Transition::Applied(Phase::Ready),
                        SessionEvent::PageMerged {
                            session_id,
                            generation,
                            added,
                            total,
                            timestamp,
                        },
                    )
                }
                Err(error) => {
                    // Fresh searches already cleared results; appends keep them
                    warn!(
                        "Search request failed for session {} ({:?}): {}",
                        session_id, kind, error
                    );
                    state.phase = Phase::Error;
                    state.last_error = Some(error.clone());
                    (
                        Transition::Applied(Phase::Error),
                        SessionEvent::Failed {
                            session_id,
                            generation,
                            error,
                            timestamp,
                        },
                    )
                }
            }
        };

        self.events.publish(event);
        transition
    }
}

/// Pending request of one generation
///
/// Resolved through [`InFlight::finish`]. Dropped unresolved, it fails the
/// request so the session does not stay busy.
struct InFlight<'a, B: SearchBackend> {
    session: &'a SearchSession<B>,
    generation: u64,
    kind: FetchKind,
    resolved: bool,
}

impl<'a, B: SearchBackend> InFlight<'a, B> {
    fn new(session: &'a SearchSession<B>, generation: u64, kind: FetchKind) -> Self {
        Self {
            session,
            generation,
            kind,
            resolved: false,
        }
    }

    fn finish(mut self, outcome: SearchResult<ResultPage>) -> Transition {
        self.resolved = true;
        self.session.complete(self.generation, self.kind, outcome)
    }
}

impl<B: SearchBackend> Drop for InFlight<'_, B> {
    fn drop(&mut self) {
        if self.resolved {
            return;
        }

        // Only the request that still owns the session may fail it
        let still_current = {
            let state = self.session.state.lock();
            state.generation == self.generation && state.phase.is_busy()
        };
        if still_current {
            debug!(
                "Request for generation {} dropped before completion ({:?})",
                self.generation, self.kind
            );
            self.session.complete(
                self.generation,
                self.kind,
                Err(SearchError::Transport("request cancelled".to_string())),
            );
        }
    }
}
