//! Subscribe/notify surface for search sessions
//!
//! The controller publishes one event per state transition; presentation code
//! subscribes here instead of depending on the controller's internals.

pub mod bus;
pub mod errors;
pub mod streaming;
pub mod types;

pub use bus::SessionEventBus;
pub use errors::EventBusError;
pub use streaming::FilteredReceiver;
pub use types::SessionEvent;
