use crate::commands::{CmdMessage, CmdResult};
use crate::config::ApiConfig;
use crate::decode::decode_joke;
use crate::error::Result;
use crate::fetch::Fetcher;

/// The endpoint already picks at random, so no selection happens here.
pub fn run<F: Fetcher>(fetcher: &F, config: &ApiConfig) -> Result<CmdResult> {
    let url = config.random_url()?;
    let body = fetcher.fetch(url.as_str())?;
    let joke = decode_joke(&body)?;

    let message = CmdMessage::info(format!("Joke {}", joke.id));
    Ok(CmdResult::new(joke).with_message(message))
}
