//! Application state and command implementations
//!
//! The `App` owns the API client, the caught-Pokémon registry, and the
//! pagination cursor for the `map`/`mapb` commands. Each REPL command maps
//! to one method here; user-facing output goes to stdout.

use rand::Rng;

use crate::data::{ApiError, PokeApiClient};
use crate::pokedex::Pokedex;

/// Minimum catch chance in percent, regardless of base experience
const MIN_CATCH_CHANCE: u32 = 5;

/// Main application state shared by all REPL commands
pub struct App {
    /// PokeAPI client (cache-through)
    api: PokeApiClient,
    /// Registry of caught Pokémon
    pub pokedex: Pokedex,
    /// URL of the next location page, if any
    next: Option<String>,
    /// URL of the previous location page, if any
    previous: Option<String>,
}

/// Catch chance in percent for a Pokémon with the given base experience.
///
/// Stronger Pokémon are harder to catch: the chance is `100 - base_experience`,
/// floored at [`MIN_CATCH_CHANCE`] percent.
pub fn catch_chance(base_experience: u32) -> u32 {
    100u32.saturating_sub(base_experience).max(MIN_CATCH_CHANCE)
}

impl App {
    /// Creates a new App around an API client.
    pub fn new(api: PokeApiClient) -> Self {
        Self {
            api,
            pokedex: Pokedex::new(),
            next: None,
            previous: None,
        }
    }

    /// `map` — prints the next page of location areas.
    pub async fn command_map(&mut self) -> Result<(), ApiError> {
        let url = self.next.clone();
        let page = self.api.location_page(url.as_deref()).await?;

        for location in &page.results {
            println!("{}", location.name);
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    /// `mapb` — prints the previous page of location areas.
    pub async fn command_map_back(&mut self) -> Result<(), ApiError> {
        let Some(url) = self.previous.clone() else {
            println!("you're on the first page");
            return Ok(());
        };
        let page = self.api.location_page(Some(&url)).await?;

        for location in &page.results {
            println!("{}", location.name);
        }

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }

    /// `explore <area>` — lists the Pokémon found in a location area.
    pub async fn command_explore(&mut self, area: &str) -> Result<(), ApiError> {
        println!("Exploring {area}...");
        let location = self.api.location_area(area).await?;

        if location.pokemon_encounters.is_empty() {
            println!("No Pokémon found in {area}");
            return Ok(());
        }

        println!("Found Pokemon:");
        for encounter in &location.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(())
    }

    /// `catch <name>` — throws a Pokeball and records the Pokémon on success.
    pub async fn command_catch(&mut self, name: &str) -> Result<(), ApiError> {
        let pokemon = self.api.pokemon(name).await?;
        println!("Throwing a Pokeball at {}...", pokemon.name);

        let chance = catch_chance(pokemon.base_experience.unwrap_or(0));
        let roll = rand::thread_rng().gen_range(0..100);

        if roll < chance {
            println!("{} was caught!", pokemon.name);
            println!("You may now inspect it with the inspect command.");
            self.pokedex.record(pokemon);
        } else {
            println!("{} escaped!", pokemon.name);
        }
        Ok(())
    }

    /// `inspect <name>` — prints details of a caught Pokémon.
    pub fn command_inspect(&self, name: &str) {
        let Some(pokemon) = self.pokedex.get(name) else {
            println!("you have not caught that pokemon");
            return;
        };

        println!("Name: {}", pokemon.name);
        println!("Height: {}", pokemon.height);
        println!("Weight: {}", pokemon.weight);
        println!("Stats:");
        for stat in &pokemon.stats {
            println!("  -{}: {}", stat.stat.name, stat.base_stat);
        }
        println!("Types:");
        for slot in &pokemon.types {
            println!("  - {}", slot.kind.name);
        }
    }

    /// `pokedex` — lists all caught Pokémon.
    pub fn command_pokedex(&self) {
        if self.pokedex.is_empty() {
            println!("Your Pokedex is empty. Catch some Pokémon first!");
            return;
        }

        println!("Your Pokedex:");
        for name in self.pokedex.names() {
            println!(" - {name}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_chance_weak_pokemon() {
        // base_experience 39 (e.g. caterpie) -> 61% chance
        assert_eq!(catch_chance(39), 61);
    }

    #[test]
    fn test_catch_chance_floors_at_minimum() {
        assert_eq!(catch_chance(100), MIN_CATCH_CHANCE);
        assert_eq!(catch_chance(306), MIN_CATCH_CHANCE);
    }

    #[test]
    fn test_catch_chance_zero_experience() {
        assert_eq!(catch_chance(0), 100);
    }

    #[test]
    fn test_catch_chance_boundary() {
        assert_eq!(catch_chance(95), 5);
        assert_eq!(catch_chance(94), 6);
    }
}
