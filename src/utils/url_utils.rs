//! URL helpers for building search endpoints.

use anyhow::{Context, Result};
use url::Url;

/// Normalize a user-supplied base URL
///
/// Prepends `http://` when no scheme is present and strips trailing slashes,
/// so that joining an absolute path never produces `//`.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    with_scheme.trim_end_matches('/').to_string()
}

/// Check if a URL is a usable http(s) base URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Join a normalized base URL and an endpoint path into a parsed `Url`
///
/// # Errors
///
/// Returns an error if the combination is not a valid URL.
pub fn join_endpoint(base_url: &str, path: &str) -> Result<Url> {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    Url::parse(&format!("{base_url}{path}"))
        .with_context(|| format!("Invalid search endpoint: {base_url}{path}"))
}
