//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::SearchConfigBuilder;

impl<State> SearchConfigBuilder<State> {
    /// Set the endpoint path, e.g. `/api/search`
    #[must_use]
    pub fn search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }

    /// Set the number of results requested per page
    ///
    /// Validated in `build()`: the service accepts at most 20.
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Set or clear the `v` query parameter
    #[must_use]
    pub fn api_version(mut self, version: Option<String>) -> Self {
        self.api_version = version;
        self
    }

    #[must_use]
    pub fn connect_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set a whole-request timeout
    ///
    /// Leave unset unless the deployment needs one: a timed-out request surfaces
    /// as a transport error and moves the session into its error phase.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}
