use clap::{Parser, Subcommand};
use dadjoke::config::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "dadjoke", bin_name = "dadjoke", version)]
#[command(about = "Dad jokes from icanhazdadjoke.com, in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs and details on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base url of the joke API
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetches a random dad joke!
    #[command(
        long_about = "Calls the icanhazdadjoke API and prints a random dad joke.\n\
                      With --term, searches for jokes containing the term and prints one of them at random."
    )]
    Random {
        /// A search term to find a dad joke
        #[arg(short, long)]
        term: Option<String>,
    },
}
