//! Data types for Pokémon API responses.

use serde_json::{Map, Value};

/// A Pokémon record exactly as the upstream API returned it.
///
/// The service never inspects the payload beyond what the client view
/// displays, so the record stays an untyped JSON object end to end.
pub type PokemonRecord = Map<String, Value>;

/// Public PokéAPI v2 root.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
