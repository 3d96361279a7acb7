//! Shared configuration constants for devsearch
//!
//! This module contains default values and wire constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Results requested per page: 20
///
/// The remote search service rejects pages larger than this, so it is both
/// the default and the upper bound accepted by the config builder.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound for `page_size` enforced at config build time
pub const MAX_PAGE_SIZE: usize = 20;

/// Path of the search endpoint relative to the base URL
pub const DEFAULT_SEARCH_PATH: &str = "/api/search";

/// Client version tag sent as the `v` query parameter
///
/// The service uses it to bust intermediary caches when the response shape
/// changes. Set to `None` in the config to omit the parameter.
pub const DEFAULT_API_VERSION: &str = "1.03";

/// Base URL used when nothing is configured (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// TCP connect timeout for the HTTP transport
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Buffered notifications per subscriber before it starts lagging
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Maximum query length in characters, after trimming
pub const MAX_QUERY_LENGTH: usize = 500;

/// Characters of a non-JSON error body kept in `SearchError::Status`
pub const ERROR_BODY_EXCERPT_CHARS: usize = 200;

/// User agent sent with every search request
pub const USER_AGENT: &str = concat!("devsearch-client/", env!("CARGO_PKG_VERSION"));

// Query parameter names understood by the search service
pub const PARAM_TERM: &str = "s";
pub const PARAM_OFFSET: &str = "f";
pub const PARAM_SIZE: &str = "size";
pub const PARAM_VERSION: &str = "v";
pub const PARAM_CURSOR: &str = "sa";
