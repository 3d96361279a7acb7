//! Type-safe builder for `SearchConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the base URL is set before building a `SearchConfig`.

use crate::utils::{
    DEFAULT_API_VERSION, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_EVENT_CAPACITY, DEFAULT_PAGE_SIZE,
    DEFAULT_SEARCH_PATH, MAX_PAGE_SIZE, USER_AGENT, is_valid_url, join_endpoint,
    normalize_base_url,
};
use anyhow::{Result, bail};
use std::marker::PhantomData;

use super::types::SearchConfig;

// Type states for the builder
pub struct WithBaseUrl;

pub struct SearchConfigBuilder<State = ()> {
    pub(crate) base_url: Option<String>,
    pub(crate) search_path: String,
    pub(crate) page_size: usize,
    pub(crate) api_version: Option<String>,
    pub(crate) connect_timeout_secs: Option<u64>,
    pub(crate) request_timeout_secs: Option<u64>,
    pub(crate) user_agent: String,
    pub(crate) event_capacity: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SearchConfigBuilder<()> {
    fn default() -> Self {
        Self {
            base_url: None,
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            api_version: Some(DEFAULT_API_VERSION.to_string()),
            connect_timeout_secs: Some(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout_secs: None,
            user_agent: USER_AGENT.to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            _phantom: PhantomData,
        }
    }
}

impl SearchConfig {
    /// Create a builder for configuring a `SearchConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SearchConfigBuilder<()> {
        SearchConfigBuilder::default()
    }
}

impl SearchConfigBuilder<()> {
    /// Set the search service base URL
    ///
    /// A missing scheme defaults to `http://`; trailing slashes are dropped.
    pub fn base_url(self, url: impl Into<String>) -> SearchConfigBuilder<WithBaseUrl> {
        let normalized_url = normalize_base_url(&url.into());

        SearchConfigBuilder {
            base_url: Some(normalized_url),
            search_path: self.search_path,
            page_size: self.page_size,
            api_version: self.api_version,
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            event_capacity: self.event_capacity,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the base URL is set
impl SearchConfigBuilder<WithBaseUrl> {
    pub fn build(self) -> Result<SearchConfig> {
        let Some(base_url) = self.base_url else {
            bail!("Base URL is required");
        };

        if !is_valid_url(&base_url) {
            bail!("Invalid search service URL '{base_url}': expected an http(s) URL with a host");
        }

        // Fails early on paths that cannot form a URL
        join_endpoint(&base_url, &self.search_path)?;

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            bail!(
                "Page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            );
        }

        if self.event_capacity == 0 {
            bail!("Event capacity must be greater than zero");
        }

        Ok(SearchConfig {
            base_url,
            search_path: self.search_path,
            page_size: self.page_size,
            api_version: self.api_version,
            connect_timeout_secs: self.connect_timeout_secs,
            request_timeout_secs: self.request_timeout_secs,
            user_agent: self.user_agent,
            event_capacity: self.event_capacity,
        })
    }
}
