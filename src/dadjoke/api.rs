//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! dadjoke operation, whatever the UI.
//!
//! The facade decides *which* command runs (random endpoint vs. search) and
//! supplies the process-wide random source. It never prints and never exits;
//! callers get a `Result<CmdResult>` and decide what to show.
//!
//! `JokesApi<F: Fetcher>` is generic over the fetcher:
//! - Production: `JokesApi<HttpFetcher>`
//! - Testing: `JokesApi<StaticFetcher>`

use crate::commands;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::fetch::Fetcher;
use rand::Rng;

pub struct JokesApi<F: Fetcher> {
    fetcher: F,
    config: ApiConfig,
}

impl<F: Fetcher> JokesApi<F> {
    pub fn new(fetcher: F, config: ApiConfig) -> Self {
        Self { fetcher, config }
    }

    /// Random joke when `term` is absent or blank, otherwise a random search hit.
    /// A non-blank term is searched exactly as given.
    pub fn joke(&self, term: Option<&str>) -> Result<commands::CmdResult> {
        match term.filter(|t| !t.trim().is_empty()) {
            Some(term) => self.search_joke(term),
            None => self.random_joke(),
        }
    }

    pub fn random_joke(&self) -> Result<commands::CmdResult> {
        commands::random::run(&self.fetcher, &self.config)
    }

    pub fn search_joke(&self, term: &str) -> Result<commands::CmdResult> {
        self.search_joke_with_rng(term, &mut rand::thread_rng())
    }

    pub fn search_joke_with_rng<R: Rng + ?Sized>(
        &self,
        term: &str,
        rng: &mut R,
    ) -> Result<commands::CmdResult> {
        commands::search::run(&self.fetcher, &self.config, term, rng)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
