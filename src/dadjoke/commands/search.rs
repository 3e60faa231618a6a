use crate::commands::{CmdMessage, CmdResult};
use crate::config::ApiConfig;
use crate::decode::decode_search_result;
use crate::error::{JokeError, Result};
use crate::fetch::Fetcher;
use crate::select::pick_random;
use rand::Rng;
use tracing::{debug, warn};

pub fn run<F: Fetcher, R: Rng + ?Sized>(
    fetcher: &F,
    config: &ApiConfig,
    term: &str,
    rng: &mut R,
) -> Result<CmdResult> {
    let url = config.search_url(term)?;
    let body = fetcher.fetch(url.as_str())?;
    let envelope = decode_search_result(&body)?;
    let jokes = envelope.jokes()?;

    debug!(
        term,
        total_jokes = envelope.total_jokes,
        results = jokes.len(),
        "decoded search results"
    );

    // The reported total is informational only; bounds come from the decoded list
    let mismatch = usize::try_from(envelope.total_jokes).ok() != Some(jokes.len());
    if mismatch {
        warn!(
            total_jokes = envelope.total_jokes,
            results = jokes.len(),
            "search total does not match results"
        );
    }

    let joke = pick_random(&jokes, rng).map_err(|err| match err {
        JokeError::EmptySet { .. } => JokeError::EmptySet {
            term: Some(term.to_string()),
        },
        other => other,
    })?;

    let mut result = CmdResult::new(joke.clone());
    if mismatch {
        result.add_message(CmdMessage::warning(format!(
            "API reported {} jokes but returned {}",
            envelope.total_jokes,
            jokes.len()
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Picked joke {} from {} matching '{}'",
        joke.id,
        jokes.len(),
        term
    )));
    Ok(result)
}
