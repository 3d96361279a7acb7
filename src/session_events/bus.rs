//! Event bus implementation for publishing and subscribing to session events

use tokio::sync::broadcast;

use super::streaming::FilteredReceiver;
use super::types::SessionEvent;

/// Broadcast bus for session events
///
/// Publishing never blocks. Slow subscribers lag and skip old events; a
/// missing subscriber is not an error for the publisher.
#[derive(Debug, Clone)]
pub struct SessionEventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionEventBus {
    /// Create a new event bus with the specified capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero (config validation rejects it).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// # Returns
    /// Number of active subscribers that received the event
    pub fn publish(&self, event: SessionEvent) -> usize {
        match self.sender.send(event) {
            Ok(count) => count,
            Err(_) => {
                log::debug!("Published session event but no active subscribers");
                0
            }
        }
    }

    /// Subscribe to events
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Create a filtered subscriber that only receives matching events
    pub fn subscribe_filtered<F>(&self, filter: F) -> FilteredReceiver<F>
    where
        F: Fn(&SessionEvent) -> bool + Send + Sync + 'static,
    {
        FilteredReceiver::new(self.subscribe(), filter)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
