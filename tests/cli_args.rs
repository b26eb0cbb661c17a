//! Integration tests for CLI argument handling and startup
//!
//! Runs the built binary; none of these tests touch the network because
//! the REPL only fetches once a lookup command is entered.

use std::io::Write;
use std::process::{Command, Stdio};

/// Helper to run the binary with given args and stdin content
fn run_cli(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pokedex");
    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for pokedex")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"], "");
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pokedex"), "Help should mention pokedex");
    assert!(stdout.contains("--ttl"), "Help should mention --ttl flag");
}

#[test]
fn test_zero_ttl_fails_at_startup() {
    let output = run_cli(&["--ttl", "0"], "");
    assert!(!output.status.success(), "Expected --ttl 0 to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("TTL"),
        "Should report the invalid TTL: {}",
        stderr
    );
}

#[test]
fn test_exit_command_ends_session() {
    let output = run_cli(&[], "exit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pokedex > "), "Should print the prompt");
    assert!(stdout.contains("Goodbye"), "Should say goodbye on exit");
}

#[test]
fn test_eof_ends_session() {
    let output = run_cli(&[], "");
    assert!(output.status.success(), "Closed stdin should end the REPL");
}

#[test]
fn test_unknown_command() {
    let output = run_cli(&[], "blorp\nexit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unknown command"));
}

#[test]
fn test_help_command_lists_commands() {
    let output = run_cli(&[], "help\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Welcome to the Pokedex!"));
    for name in ["map", "mapb", "explore", "catch", "inspect", "pokedex"] {
        assert!(stdout.contains(name), "help should list {name}");
    }
}

#[test]
fn test_explore_without_argument_prints_usage() {
    let output = run_cli(&[], "explore\ncatch\ninspect\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: explore <area_name>"));
    assert!(stdout.contains("Usage: catch <pokemon_name>"));
    assert!(stdout.contains("Usage: inspect <pokemon_name>"));
}

#[test]
fn test_mapb_on_first_page() {
    let output = run_cli(&[], "mapb\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("you're on the first page"));
}

#[test]
fn test_empty_pokedex_message() {
    let output = run_cli(&[], "pokedex\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Your Pokedex is empty"));
}

#[test]
fn test_inspect_uncaught_pokemon() {
    let output = run_cli(&[], "inspect pikachu\nexit\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("you have not caught that pokemon"));
}
