//! Test utilities and helper functions for the devsearch test suite

use devsearch_client::{
    PageRequest, ResultItem, ResultPage, SearchBackend, SearchError, SearchResult, SortKey,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Builds a result item whose title, URL and sort key derive from `key`
#[allow(dead_code)]
pub fn item(key: &str) -> ResultItem {
    ResultItem {
        title: key.to_string(),
        url: format!("https://example.com/{key}"),
        highlight_snippet: None,
        sort_key: SortKey::new(format!("sort-{key}")),
    }
}

/// Builds a page of items, one per key
#[allow(dead_code)]
pub fn page(keys: &[&str]) -> ResultPage {
    ResultPage::new(keys.iter().map(|k| item(k)).collect())
}

/// Builds a page with explicit sort keys, as `(title, url, sort)` triples
#[allow(dead_code)]
pub fn page_with_sorts(hits: &[(&str, &str, &str)]) -> ResultPage {
    ResultPage::new(
        hits.iter()
            .map(|(title, url, sort)| ResultItem {
                title: title.to_string(),
                url: url.to_string(),
                highlight_snippet: None,
                sort_key: SortKey::new(*sort),
            })
            .collect(),
    )
}

#[allow(dead_code)]
pub fn transport_error() -> SearchError {
    SearchError::Transport("connection refused".to_string())
}

#[allow(dead_code)]
enum Scripted {
    Ready(SearchResult<ResultPage>),
    Gated(oneshot::Receiver<SearchResult<ResultPage>>),
}

#[allow(dead_code)]
#[derive(Default)]
struct Script {
    responses: VecDeque<Scripted>,
    calls: Vec<PageRequest>,
}

/// Backend that answers from a queue of scripted responses
///
/// Every call is recorded. Gated responses stay pending until the matching
/// [`Gate`] is opened, which keeps a request in flight for as long as a test
/// needs.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
}

/// Sender side of a gated response
#[allow(dead_code)]
pub struct Gate(oneshot::Sender<SearchResult<ResultPage>>);

impl Gate {
    #[allow(dead_code)]
    pub fn open(self, response: SearchResult<ResultPage>) {
        // The request may have been dropped; nothing to deliver to then
        let _ = self.0.send(response);
    }
}

#[allow(dead_code)]
impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: ResultPage) -> &Self {
        self.script.lock().responses.push_back(Scripted::Ready(Ok(page)));
        self
    }

    pub fn push_error(&self, error: SearchError) -> &Self {
        self.script.lock().responses.push_back(Scripted::Ready(Err(error)));
        self
    }

    pub fn push_gate(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.script.lock().responses.push_back(Scripted::Gated(rx));
        Gate(tx)
    }

    pub fn calls(&self) -> Vec<PageRequest> {
        self.script.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().calls.len()
    }
}

#[allow(dead_code)]
impl SearchBackend for ScriptedBackend {
    fn fetch_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = SearchResult<ResultPage>> + Send {
        let next = {
            let mut script = self.script.lock();
            script.calls.push(request);
            script.responses.pop_front()
        };

        async move {
            match next {
                Some(Scripted::Ready(response)) => response,
                Some(Scripted::Gated(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(SearchError::Transport("gate dropped".to_string()))),
                None => Err(SearchError::Transport("no scripted response".to_string())),
            }
        }
    }
}

/// Waits for a condition to be true with timeout
#[allow(dead_code)]
pub async fn wait_for_condition<F>(mut check: F, timeout_secs: u64) -> anyhow::Result<()>
where
    F: FnMut() -> bool,
{
    let start = std::time::Instant::now();
    let timeout = std::time::Duration::from_secs(timeout_secs);

    while start.elapsed() < timeout {
        if check() {
            return Ok(());
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    Err(anyhow::anyhow!("Timeout waiting for condition"))
}

/// Builds the double-encoded response body the search service sends
#[allow(dead_code)]
pub fn envelope(hits: serde_json::Value) -> String {
    serde_json::json!({ "msg": serde_json::json!({ "hits": hits }).to_string() }).to_string()
}
