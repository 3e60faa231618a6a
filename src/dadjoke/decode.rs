use crate::error::{JokeError, Result};
use crate::model::{Joke, SearchResult};

/// Decode the body of the random-joke endpoint.
pub fn decode_joke(bytes: &[u8]) -> Result<Joke> {
    serde_json::from_slice(bytes).map_err(JokeError::decode("joke"))
}

/// Decode the search envelope. The embedded results stay raw until
/// [`SearchResult::jokes`] is called.
pub fn decode_search_result(bytes: &[u8]) -> Result<SearchResult> {
    serde_json::from_slice(bytes).map_err(JokeError::decode("search envelope"))
}

impl SearchResult {
    /// Second decode pass over the embedded `results` array.
    pub fn jokes(&self) -> Result<Vec<Joke>> {
        serde_json::from_str(self.results.get()).map_err(JokeError::decode("search results"))
    }
}
