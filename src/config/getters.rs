//! Getter methods for `SearchConfig`
//!
//! This module provides all the accessor methods for retrieving configuration
//! values from a `SearchConfig` instance.

use std::time::Duration;

use anyhow::Result;
use url::Url;

use super::types::SearchConfig;
use crate::utils::join_endpoint;

impl SearchConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    /// Full endpoint URL (`base_url` + `search_path`)
    ///
    /// # Errors
    ///
    /// Only fails for configs that bypassed the builder (e.g. deserialized ones).
    pub fn endpoint(&self) -> Result<Url> {
        join_endpoint(&self.base_url, &self.search_path)
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}
