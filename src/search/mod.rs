//! Search service access
//!
//! Everything needed to turn a query string and a pagination position into a
//! typed page of results.
//!
//! ## Submodules
//! - **`query`**: Input normalization (`Query::normalize`).
//! - **`client`**: Request construction and the HTTP implementation of `SearchBackend`.
//! - **`wire`**: Decoding of the double-encoded response envelope.
//! - **`cursor`**: Offset and continuation-token tracking.
//! - **`errors`**: Failure taxonomy.
//! - **`types`**: Result items, pages and opaque tokens.

pub mod client;
pub mod cursor;
pub mod errors;
pub mod query;
pub mod types;
pub mod wire;

pub use client::{HttpSearchClient, PageRequest, SearchBackend};
pub use cursor::CursorManager;
pub use errors::{ErrorKind, SearchError, SearchResult};
pub use query::Query;
pub use types::{Cursor, ResultItem, ResultPage, SortKey};
