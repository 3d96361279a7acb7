//! Environment-driven configuration loading
//!
//! Reads `DEVSEARCH_*` variables on top of the builder defaults. Values that are
//! present but unparseable are reported as errors rather than silently ignored.

use anyhow::{Context, Result};
use std::str::FromStr;

use super::types::SearchConfig;
use crate::utils::DEFAULT_BASE_URL;

pub const ENV_BASE_URL: &str = "DEVSEARCH_BASE_URL";
pub const ENV_SEARCH_PATH: &str = "DEVSEARCH_SEARCH_PATH";
pub const ENV_PAGE_SIZE: &str = "DEVSEARCH_PAGE_SIZE";
pub const ENV_API_VERSION: &str = "DEVSEARCH_API_VERSION";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "DEVSEARCH_CONNECT_TIMEOUT_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "DEVSEARCH_REQUEST_TIMEOUT_SECS";

impl SearchConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value or the resulting
    /// config fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Same as [`SearchConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut builder = SearchConfig::builder().base_url(base_url);

        if let Some(path) = lookup(ENV_SEARCH_PATH) {
            builder = builder.search_path(path);
        }
        if let Some(size) = parse_var::<usize>(&lookup, ENV_PAGE_SIZE)? {
            builder = builder.page_size(size);
        }
        if let Some(version) = lookup(ENV_API_VERSION) {
            // An explicitly empty value disables the `v` parameter
            let version = version.trim().to_string();
            builder = builder.api_version((!version.is_empty()).then_some(version));
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_CONNECT_TIMEOUT_SECS)? {
            builder = builder.connect_timeout_secs(Some(secs));
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_REQUEST_TIMEOUT_SECS)? {
            builder = builder.request_timeout_secs(Some(secs));
        }

        builder.build()
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {key}: '{raw}'"))
        })
        .transpose()
}
