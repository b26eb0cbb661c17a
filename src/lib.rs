//! Pokedex CLI library
//!
//! Exposes the application modules for use by the binary and the
//! integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod data;
pub mod pokedex;
pub mod repl;
