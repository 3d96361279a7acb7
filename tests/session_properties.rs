//! Property tests for result accumulation

use devsearch_client::{IgnoreReason, Phase, ResultItem, SearchSession, Transition};
use proptest::prelude::*;

mod common;
use common::{ScriptedBackend, page};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime")
}

/// Page sizes for a session; each page gets distinct keys
fn page_sizes() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=20, 1..8)
}

fn keys_for(sizes: &[usize]) -> Vec<Vec<String>> {
    sizes
        .iter()
        .enumerate()
        .map(|(p, &n)| (0..n).map(|i| format!("p{p}-i{i}")).collect())
        .collect()
}

proptest! {
    #[test]
    fn results_equal_concatenation_of_pages(sizes in page_sizes()) {
        let keys = keys_for(&sizes);
        let backend = ScriptedBackend::new();
        for page_keys in &keys {
            let refs: Vec<&str> = page_keys.iter().map(String::as_str).collect();
            backend.push_page(page(&refs));
        }

        let session = SearchSession::new(backend.clone());
        let snapshot = runtime().block_on(async {
            session.search("rust").await;
            for _ in 1..keys.len() {
                session.load_more().await;
            }
            session.snapshot()
        });

        let expected: Vec<ResultItem> = keys
            .iter()
            .flatten()
            .map(|k| common::item(k))
            .collect();
        prop_assert_eq!(snapshot.results, expected);
        prop_assert_eq!(snapshot.phase, Phase::Ready);
        prop_assert_eq!(backend.call_count(), keys.len());
    }

    #[test]
    fn exhaustion_is_terminal(sizes in page_sizes(), extra_calls in 1usize..10) {
        let keys = keys_for(&sizes);
        let backend = ScriptedBackend::new();
        for page_keys in &keys {
            let refs: Vec<&str> = page_keys.iter().map(String::as_str).collect();
            backend.push_page(page(&refs));
        }
        backend.push_page(page(&[]));
        // Would be merged if exhaustion ever let a request through
        backend.push_page(page(&["after-exhaustion"]));

        let session = SearchSession::new(backend.clone());
        let (before, after, transitions) = runtime().block_on(async {
            session.search("rust").await;
            for _ in 0..keys.len() {
                session.load_more().await;
            }
            let before = session.snapshot();
            let mut transitions = Vec::new();
            for _ in 0..extra_calls {
                transitions.push(session.load_more().await);
            }
            (before, session.snapshot(), transitions)
        });

        prop_assert_eq!(before.phase, Phase::Exhausted);
        prop_assert_eq!(&before, &after);
        prop_assert!(transitions
            .iter()
            .all(|t| *t == Transition::Ignored(IgnoreReason::NotReady(Phase::Exhausted))));
        prop_assert_eq!(backend.call_count(), keys.len() + 1);
    }
}
