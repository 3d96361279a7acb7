//! Tests for the type-safe configuration builder and environment loading

use devsearch_client::SearchConfig;
use devsearch_client::config::env::{
    ENV_API_VERSION, ENV_BASE_URL, ENV_CONNECT_TIMEOUT_SECS, ENV_PAGE_SIZE,
    ENV_REQUEST_TIMEOUT_SECS, ENV_SEARCH_PATH,
};
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_builder_requires_base_url() {
    // This should not compile if uncommented - base URL is mandatory
    // let config = SearchConfig::builder().build();

    let config = SearchConfig::builder()
        .base_url("https://search.example.com")
        .build()
        .unwrap();

    assert_eq!(config.base_url(), "https://search.example.com");
}

#[test]
fn test_builder_optional_fields_have_defaults() {
    let config = SearchConfig::builder()
        .base_url("http://localhost:8000")
        .build()
        .unwrap();

    assert_eq!(config.search_path(), "/api/search");
    assert_eq!(config.page_size(), 20);
    assert_eq!(config.api_version(), Some("1.03"));
    assert_eq!(config.connect_timeout(), Some(Duration::from_secs(5)));
    assert_eq!(config.request_timeout(), None);
    assert!(config.user_agent().starts_with("devsearch"));
    assert!(config.event_capacity() > 0);
    assert_eq!(
        config.endpoint().unwrap().as_str(),
        "http://localhost:8000/api/search"
    );
}

#[test]
fn test_builder_custom_values() {
    let config = SearchConfig::builder()
        .search_path("/v2/find")
        .page_size(10)
        .api_version(None)
        .request_timeout_secs(Some(30))
        .base_url("https://search.example.com")
        .event_capacity(8)
        .build()
        .unwrap();

    assert_eq!(config.page_size(), 10);
    assert_eq!(config.api_version(), None);
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.event_capacity(), 8);
    assert_eq!(
        config.endpoint().unwrap().as_str(),
        "https://search.example.com/v2/find"
    );
}

#[test]
fn test_base_url_normalization() {
    let config = SearchConfig::builder()
        .base_url("search.example.com:9200/")
        .build()
        .unwrap();

    assert_eq!(config.base_url(), "http://search.example.com:9200");
}

#[test]
fn test_builder_rejects_invalid_values() {
    assert!(
        SearchConfig::builder()
            .base_url("http://exa mple.com")
            .build()
            .is_err()
    );
    assert!(
        SearchConfig::builder()
            .base_url("http://localhost")
            .page_size(0)
            .build()
            .is_err()
    );
    assert!(
        SearchConfig::builder()
            .base_url("http://localhost")
            .page_size(21)
            .build()
            .is_err()
    );
    assert!(
        SearchConfig::builder()
            .base_url("http://localhost")
            .event_capacity(0)
            .build()
            .is_err()
    );
}

#[test]
fn test_from_lookup_uses_defaults_when_unset() {
    let config = SearchConfig::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.base_url(), "http://localhost:8000");
    assert_eq!(config.page_size(), 20);
    assert_eq!(config.api_version(), Some("1.03"));
}

#[test]
fn test_from_lookup_reads_all_variables() {
    let config = SearchConfig::from_lookup(lookup_from(&[
        (ENV_BASE_URL, "https://docs.example.org/"),
        (ENV_SEARCH_PATH, "/search"),
        (ENV_PAGE_SIZE, " 15 "),
        (ENV_API_VERSION, "2.0"),
        (ENV_CONNECT_TIMEOUT_SECS, "2"),
        (ENV_REQUEST_TIMEOUT_SECS, "12"),
    ]))
    .unwrap();

    assert_eq!(config.base_url(), "https://docs.example.org");
    assert_eq!(config.search_path(), "/search");
    assert_eq!(config.page_size(), 15);
    assert_eq!(config.api_version(), Some("2.0"));
    assert_eq!(config.connect_timeout(), Some(Duration::from_secs(2)));
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(12)));
}

#[test]
fn test_from_lookup_empty_api_version_disables_parameter() {
    let config = SearchConfig::from_lookup(lookup_from(&[(ENV_API_VERSION, "")])).unwrap();
    assert_eq!(config.api_version(), None);
}

#[test]
fn test_from_lookup_reports_bad_numbers() {
    let err = SearchConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "twenty")])).unwrap_err();
    assert!(err.to_string().contains(ENV_PAGE_SIZE));

    let err =
        SearchConfig::from_lookup(lookup_from(&[(ENV_REQUEST_TIMEOUT_SECS, "-1")])).unwrap_err();
    assert!(err.to_string().contains(ENV_REQUEST_TIMEOUT_SECS));

    // Parsed but out of range
    assert!(SearchConfig::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "50")])).is_err());
}

#[test]
fn test_config_serde_roundtrip() {
    let config = SearchConfig::builder()
        .base_url("http://localhost:8000")
        .page_size(5)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let restored: SearchConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, restored);
}
