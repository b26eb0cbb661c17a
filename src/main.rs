//! Pokedex CLI - an interactive Pokedex backed by PokeAPI
//!
//! Starts a REPL that looks up locations and Pokémon from PokeAPI and lets
//! the user catch them into an in-memory Pokedex. Responses are memoized in
//! a time-expiring cache so repeated lookups within the TTL never hit the
//! network twice.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokedex_cli::app::App;
use pokedex_cli::cache::Cache;
use pokedex_cli::cli::Cli;
use pokedex_cli::data::PokeApiClient;
use pokedex_cli::repl;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so they never mix with REPL output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // A zero --ttl is rejected here.
    let cache = match Cache::new(Duration::from_secs(cli.ttl)) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let api = match &cli.api_url {
        Some(url) => PokeApiClient::with_base_url(cache.clone(), url),
        None => PokeApiClient::new(cache.clone()),
    };

    let mut app = App::new(api);
    repl::run(&mut app).await?;

    cache.close();
    Ok(())
}
