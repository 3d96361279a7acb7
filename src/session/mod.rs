//! Search session controller
//!
//! Owns the accumulated result list and the pagination state for the current
//! query, and exposes both to presentation code through snapshots and events.
//!
//! ## Submodules
//! - **`controller`**: `SearchSession`, the `search` / `load_more` / `clear` operations.
//! - **`state`**: Phases and the internal session state.
//! - **`snapshot`**: Read-only copies of the state with presentation flags.

pub mod controller;
pub mod snapshot;
pub mod state;

pub use controller::{IgnoreReason, SearchSession, Transition};
pub use snapshot::SessionSnapshot;
pub use state::Phase;
