//! Data models for the PokeAPI payloads consumed by the Pokedex
//!
//! Only the fields the application actually uses are modeled; everything
//! else in the (large) API responses is ignored during deserialization.

pub mod pokeapi;

pub use pokeapi::{ApiError, PokeApiClient};

use serde::Deserialize;

/// A named API resource reference (`{ "name": ..., "url": ... }`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. a location area or Pokémon name
    pub name: String,
    /// Canonical URL of the resource
    #[serde(default)]
    pub url: String,
}

/// One page of the paginated location-area listing
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    /// Location areas on this page
    pub results: Vec<NamedResource>,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
}

/// A Pokémon that can be encountered in a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The encountered Pokémon
    pub pokemon: NamedResource,
}

/// A single location area and the Pokémon found there
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// Area name
    pub name: String,
    /// Pokémon that can be encountered in this area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One base stat of a Pokémon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// Stat value
    pub base_stat: u32,
    /// Stat name, e.g. "hp" or "speed"
    pub stat: NamedResource,
}

/// One type slot of a Pokémon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// The type itself, e.g. "electric"
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A Pokémon as returned by the `/pokemon/{name}` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokémon name
    pub name: String,
    /// Base experience granted for defeating it; drives the catch chance.
    /// Null in the API for a few special forms.
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stats
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    /// Type slots
    #[serde(default)]
    pub types: Vec<PokemonType>,
}
