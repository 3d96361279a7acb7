//! Wire format of the search service response
//!
//! The service wraps its payload in an envelope whose `msg` field is itself a
//! JSON document serialized to a string:
//!
//! ```json
//! {"msg": "{\"hits\":[{\"title\":\"A\",\"url\":\"u1\",\"highlight\":{\"content\":\"...\"},\"sort\":\"[1.5,3]\"}]}"}
//! ```
//!
//! An inline (single-encoded) `msg` object is accepted as well.

use serde::Deserialize;

use super::errors::{SearchError, SearchResult};
use super::types::{ResultItem, ResultPage, SortKey};

#[derive(Debug, Deserialize)]
struct Envelope {
    msg: EnvelopeMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EnvelopeMessage {
    Encoded(String),
    Inline(HitsPayload),
}

#[derive(Debug, Deserialize)]
struct HitsPayload {
    hits: Vec<WireHit>,
}

#[derive(Debug, Deserialize)]
struct WireHit {
    title: String,
    url: String,
    #[serde(default)]
    highlight: Option<WireHighlight>,
    sort: SortToken,
}

#[derive(Debug, Deserialize)]
struct WireHighlight {
    #[serde(default)]
    content: Option<Fragments>,
}

/// Highlight content: one string, or the search engine's fragment list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Fragments {
    One(String),
    Many(Vec<String>),
}

/// Sort token: already stringified, or the raw sort values
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SortToken {
    Text(String),
    Raw(serde_json::Value),
}

impl Fragments {
    fn into_snippet(self) -> Option<String> {
        let joined = match self {
            Fragments::One(s) => s,
            Fragments::Many(parts) => parts.join(" "),
        };
        (!joined.is_empty()).then_some(joined)
    }
}

impl SortToken {
    fn into_key(self) -> SortKey {
        match self {
            SortToken::Text(s) => SortKey::new(s),
            // Value's Display writes compact JSON, e.g. `[1.5,1700000000,7]`
            SortToken::Raw(value) => SortKey::new(value.to_string()),
        }
    }
}

impl From<WireHit> for ResultItem {
    fn from(hit: WireHit) -> Self {
        ResultItem {
            title: hit.title,
            url: hit.url,
            highlight_snippet: hit
                .highlight
                .and_then(|h| h.content)
                .and_then(Fragments::into_snippet),
            sort_key: hit.sort.into_key(),
        }
    }
}

/// Decode a success response body into a `ResultPage`
///
/// # Errors
///
/// `MalformedEnvelope` if the outer object is not `{"msg": ...}`,
/// `MalformedPayload` if the inner document lacks a valid `hits` list.
pub fn decode_page(body: &str) -> SearchResult<ResultPage> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| SearchError::MalformedEnvelope(e.to_string()))?;

    let payload = match envelope.msg {
        EnvelopeMessage::Encoded(inner) => serde_json::from_str::<HitsPayload>(&inner)
            .map_err(|e| SearchError::MalformedPayload(e.to_string()))?,
        EnvelopeMessage::Inline(payload) => payload,
    };

    let items = payload.hits.into_iter().map(ResultItem::from).collect();
    Ok(ResultPage::new(items))
}
