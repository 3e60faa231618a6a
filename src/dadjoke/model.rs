use serde::Deserialize;
use serde_json::value::RawValue;

/// A single joke as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
    // Service status echo, not the HTTP status
    pub status: i64,
}

/// Envelope returned by the search endpoint.
///
/// `results` is kept as raw JSON until [`SearchResult::jokes`] decodes it, so a
/// malformed results array is reported separately from a malformed envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub results: Box<RawValue>,
    #[serde(default)]
    pub search_term: String,
    pub status: i64,
    pub total_jokes: i64,
}
