//! # Dadjoke Architecture
//!
//! Dadjoke is a small library for fetching jokes from icanhazdadjoke.com, with a CLI
//! client on top. The library never touches stdout, stderr or exit codes; that is
//! the CLI's job.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Chooses random vs. search from the optional term         │
//! │  - Owns the fetcher, config and random source               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - fetch → decode → (select) → CmdResult                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Leaves                                                     │
//! │  - fetch/: Fetcher trait, HttpFetcher, StaticFetcher        │
//! │  - decode.rs, select.rs, model.rs                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`error::JokeError`] propagated with `?`. A command either
//! returns a fully decoded joke or an error, never a half-filled joke.
//!
//! ## Testing Strategy
//!
//! 1. **Leaves and commands**: unit tests against [`fetch::memory::StaticFetcher`],
//!    with a seeded `StdRng` where selection is involved.
//! 2. **API**: dispatch tests (which endpoint was requested).
//! 3. **CLI**: `tests/` runs the binary against a local mock HTTP server.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-facing path
//! - [`fetch`]: HTTP access behind the `Fetcher` trait
//! - [`decode`]: JSON decoding of jokes and search envelopes
//! - [`select`]: Uniform random pick
//! - [`model`]: `Joke` and `SearchResult`
//! - [`config`]: API base url and user agent
//! - [`error`]: Error types and exit codes
//! - `cli`: Argument parsing, logging and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod model;
pub mod select;
