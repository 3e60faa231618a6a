//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns errors into a message and an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(e.exit_code());
    }
}
