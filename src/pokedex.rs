//! The caught-Pokémon registry
//!
//! A plain keyed collection with no eviction policy, owned by the
//! application state rather than living in a global.

use std::collections::HashMap;

use crate::data::Pokemon;

/// Registry of Pokémon the user has caught, keyed by name
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: HashMap<String, Pokemon>,
}

impl Pokedex {
    /// Creates an empty Pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught Pokémon, replacing any earlier catch of the same name.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught Pokémon by name.
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Returns the names of all caught Pokémon, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of caught Pokémon.
    pub fn len(&self) -> usize {
        self.caught.len()
    }

    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
