//! HTTP client for the remote search service
//!
//! One call to [`SearchBackend::fetch_page`] performs exactly one GET request.
//! Nothing here retries; callers decide what to do with a failure.

use anyhow::{Context, Result};
use std::future::Future;
use tracing::{debug, info};
use url::Url;

use super::errors::{SearchError, SearchResult};
use super::types::{Cursor, ResultPage};
use super::wire::decode_page;
use crate::config::SearchConfig;
use crate::utils::{PARAM_CURSOR, PARAM_OFFSET, PARAM_SIZE, PARAM_TERM, PARAM_VERSION};

/// Parameters of a single page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub term: String,
    pub offset: usize,
    pub page_size: usize,
    pub cursor: Option<Cursor>,
}

impl PageRequest {
    /// Request for the first page of a term
    #[must_use]
    pub fn first(term: impl Into<String>, page_size: usize) -> Self {
        Self {
            term: term.into(),
            offset: 0,
            page_size,
            cursor: None,
        }
    }

    /// Render the request URL
    ///
    /// Parameters are appended in the order `s`, `f`, `size`, `v`, `sa`;
    /// `v` and `sa` are omitted when absent.
    #[must_use]
    pub fn to_url(&self, endpoint: &Url, api_version: Option<&str>) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair(PARAM_TERM, &self.term)
                .append_pair(PARAM_OFFSET, &self.offset.to_string())
                .append_pair(PARAM_SIZE, &self.page_size.to_string());
            if let Some(version) = api_version {
                pairs.append_pair(PARAM_VERSION, version);
            }
            if let Some(cursor) = &self.cursor {
                pairs.append_pair(PARAM_CURSOR, cursor.as_str());
            }
        }
        url
    }
}

/// Source of result pages
///
/// The session controller is generic over this trait so it can run against the
/// HTTP client or a scripted stand-in.
pub trait SearchBackend: Send + Sync {
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = SearchResult<ResultPage>> + Send;
}

/// `reqwest`-based implementation of [`SearchBackend`]
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    http: reqwest::Client,
    endpoint: Url,
    api_version: Option<String>,
    page_size: usize,
}

impl HttpSearchClient {
    /// Build a client from a validated config
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is invalid or the TLS backend
    /// cannot be initialized.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent());
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            api_version: config.api_version().map(str::to_string),
            page_size: config.page_size(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Build the full URL for a request
    #[must_use]
    pub fn request_url(&self, request: &PageRequest) -> Url {
        request.to_url(&self.endpoint, self.api_version.as_deref())
    }
}

impl SearchBackend for HttpSearchClient {
    async fn fetch_page(&self, request: PageRequest) -> SearchResult<ResultPage> {
        let url = self.request_url(&request);
        debug!(
            "Fetching page: term='{}' offset={} size={} cursor={:?}",
            request.term,
            request.offset,
            request.page_size,
            request.cursor.as_ref().map(Cursor::as_str)
        );

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Body is only used for the error message; a failed read leaves it empty
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::from_status(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let page = decode_page(&body)?;

        info!(
            "Received {} hits for '{}' at offset {}",
            page.len(),
            request.term,
            request.offset
        );
        Ok(page)
    }
}
