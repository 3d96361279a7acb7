//! Incremental search client with cursor-based pagination
//!
//! Issues free-text queries against a remote search service and accumulates
//! ranked results page by page ("load more") without re-fetching seen pages.
//!
//! ```no_run
//! use devsearch_client::{SearchConfig, SearchSession};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SearchConfig::builder().base_url("localhost:8000").build()?;
//!     let session = SearchSession::from_config(&config)?;
//!
//!     session.search("rust async").await;
//!     session.load_more().await;
//!
//!     for item in session.snapshot().results {
//!         println!("{} - {}", item.title, item.url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod search;
pub mod session;
pub mod session_events;
pub mod utils;

pub use config::SearchConfig;
pub use search::{
    Cursor, ErrorKind, HttpSearchClient, PageRequest, Query, ResultItem, ResultPage,
    SearchBackend, SearchError, SearchResult, SortKey,
};
pub use session::{IgnoreReason, Phase, SearchSession, SessionSnapshot, Transition};
pub use session_events::{EventBusError, FilteredReceiver, SessionEvent, SessionEventBus};
