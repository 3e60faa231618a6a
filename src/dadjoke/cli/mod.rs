//! # CLI Behavior
//!
//! The CLI is the only place that knows about terminal I/O, logging setup and
//! exit codes. For the overall architecture, see the library docs.
//!
//! ## Commands
//!
//! - `dadjoke random` prints one random joke.
//! - `dadjoke random --term <TERM>` searches and prints one matching joke at random.
//! - `dadjoke` with no subcommand behaves like `dadjoke random`.
//!
//! ## Output Contract
//!
//! - Success: exactly one joke line on stdout, exit code 0.
//! - Failure: one `Error: ...` line on stderr, nothing on stdout, and a non-zero
//!   exit code from `JokeError::exit_code`.
//! - Logs and verbose details always go to stderr.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, context and logging setup
//! - `print`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
pub use print::print_error;
