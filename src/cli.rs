//! Command-line interface parsing for the Pokedex
//!
//! Startup flags only; the interactive commands themselves are handled by
//! the REPL once the program is running.

use clap::Parser;

/// Default cache TTL in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 10;

/// Pokedex - an interactive Pokedex backed by PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "An interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// How long fetched API responses stay cached, in seconds.
    ///
    /// Must be greater than zero; a zero TTL is rejected at startup.
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TTL_SECONDS)]
    pub ttl: u64,

    /// Override the PokeAPI base URL (mirrors, testing)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}
