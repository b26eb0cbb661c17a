//! The interactive REPL loop and command dispatch
//!
//! Reads lines from stdin, normalizes them with [`clean_input`], and
//! dispatches on the first word. Command errors are printed and the loop
//! continues; `exit` or end-of-input ends the session.

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::App;
use crate::data::ApiError;

/// One entry of the command table, used for dispatch and `help` output
pub struct ReplCommand {
    /// Command name as typed by the user
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
}

/// All REPL commands
pub const COMMANDS: &[ReplCommand] = &[
    ReplCommand {
        name: "help",
        description: "Displays a help message",
    },
    ReplCommand {
        name: "exit",
        description: "Exit the Pokedex",
    },
    ReplCommand {
        name: "map",
        description: "Display the next 20 Pokémon locations",
    },
    ReplCommand {
        name: "mapb",
        description: "Display the previous 20 Pokémon locations",
    },
    ReplCommand {
        name: "explore",
        description: "Explore a location to find Pokémon",
    },
    ReplCommand {
        name: "catch",
        description: "Try to catch a Pokémon by name",
    },
    ReplCommand {
        name: "inspect",
        description: "View details about a caught Pokémon",
    },
    ReplCommand {
        name: "pokedex",
        description: "Displays all caught Pokémon",
    },
];

/// Normalizes a line of user input into lowercase words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Prints the help message with the full command table.
pub fn print_help() {
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    for command in COMMANDS {
        println!("{}: {}", command.name, command.description);
    }
}

/// Prints a command error without aborting the session.
fn report(result: Result<(), ApiError>) {
    if let Err(err) = result {
        println!("Error: {err}");
    }
}

/// Runs the REPL until `exit` or end-of-input.
pub async fn run(app: &mut App) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed
            break;
        };

        let words = clean_input(&line);
        let Some((command, args)) = words.split_first() else {
            continue;
        };

        match command.as_str() {
            "help" => print_help(),
            "exit" => {
                println!("Closing the Pokedex... Goodbye!");
                break;
            }
            "map" => report(app.command_map().await),
            "mapb" => report(app.command_map_back().await),
            "explore" => match args.first() {
                Some(area) => report(app.command_explore(area).await),
                None => println!("Usage: explore <area_name>"),
            },
            "catch" => match args.first() {
                Some(name) => report(app.command_catch(name).await),
                None => println!("Usage: catch <pokemon_name>"),
            },
            "inspect" => match args.first() {
                Some(name) => app.command_inspect(name),
                None => println!("Usage: inspect <pokemon_name>"),
            },
            "pokedex" => app.command_pokedex(),
            _ => println!("Unknown command"),
        }
    }

    Ok(())
}
