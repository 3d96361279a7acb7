//! Filtered event receivers

use tokio::sync::broadcast;

use super::errors::EventBusError;
use super::types::SessionEvent;

/// Receiver that only yields events accepted by a predicate
pub struct FilteredReceiver<F>
where
    F: Fn(&SessionEvent) -> bool + Send + Sync + 'static,
{
    receiver: broadcast::Receiver<SessionEvent>,
    filter: F,
}

impl<F> FilteredReceiver<F>
where
    F: Fn(&SessionEvent) -> bool + Send + Sync + 'static,
{
    pub fn new(receiver: broadcast::Receiver<SessionEvent>, filter: F) -> Self {
        Self { receiver, filter }
    }

    /// Receive the next filtered event
    ///
    /// Waits for the next event that passes the filter. Rejected events are
    /// consumed; nothing else is lost between calls.
    pub async fn recv(&mut self) -> Result<SessionEvent, EventBusError> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if (self.filter)(&event) => return Ok(event),
                Ok(_) => {}
                Err(broadcast::error::RecvError::Closed) => return Err(EventBusError::Shutdown),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    return Err(EventBusError::ReceiverLagged(skipped));
                }
            }
        }
    }

    /// Try to receive the next filtered event without waiting
    ///
    /// # Returns
    /// * `Ok(Some(event))` - A buffered event passed the filter
    /// * `Ok(None)` - Nothing buffered passes the filter
    pub fn try_recv(&mut self) -> Result<Option<SessionEvent>, EventBusError> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if (self.filter)(&event) => return Ok(Some(event)),
                // Draining the buffer, not spinning
                Ok(_) => {}
                Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                Err(broadcast::error::TryRecvError::Closed) => return Err(EventBusError::Shutdown),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    return Err(EventBusError::ReceiverLagged(skipped));
                }
            }
        }
    }

    #[must_use]
    pub fn would_receive(&self, event: &SessionEvent) -> bool {
        (self.filter)(event)
    }
}
