//! Core configuration types for the search client
//!
//! This module contains the main `SearchConfig` struct that defines how the
//! client reaches the remote search service and how sessions page through it.

use serde::{Deserialize, Serialize};

/// Main configuration struct for search sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the search service.
    ///
    /// **INVARIANT:** Always carries an http(s) scheme and no trailing slash
    /// (normalized in builder).
    pub(crate) base_url: String,

    /// Endpoint path joined onto `base_url`
    pub(crate) search_path: String,

    /// Results requested per page, in `1..=MAX_PAGE_SIZE`
    pub(crate) page_size: usize,

    /// Value of the `v` query parameter, omitted when `None`
    pub(crate) api_version: Option<String>,

    /// Timeout in seconds for establishing the TCP connection
    ///
    /// Transport-level only. Default: 5 seconds
    pub(crate) connect_timeout_secs: Option<u64>,

    /// Timeout in seconds for a whole request
    ///
    /// Default: none. A slow service is waited on rather than reported as a failure.
    pub(crate) request_timeout_secs: Option<u64>,

    pub(crate) user_agent: String,

    /// Capacity of the session event broadcast channel
    pub(crate) event_capacity: usize,
}
