use super::print::{print_joke, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use dadjoke::api::JokesApi;
use dadjoke::config::ApiConfig;
use dadjoke::error::Result;
use dadjoke::fetch::http::HttpFetcher;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: JokesApi<HttpFetcher>,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Random { term }) => handle_random(&ctx, term),
        None => handle_random(&ctx, None),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "dadjoke=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = ApiConfig::default().with_base_url(&cli.api_url);
    config.validate()?;
    debug!(base_url = %config.base_url, user_agent = %config.user_agent, "using api");

    let fetcher = HttpFetcher::new(&config)?;
    Ok(AppContext {
        api: JokesApi::new(fetcher, config),
        verbose: cli.verbose,
    })
}

fn handle_random(ctx: &AppContext, term: Option<String>) -> Result<()> {
    let result = ctx.api.joke(term.as_deref())?;
    print_joke(&result.joke);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}
