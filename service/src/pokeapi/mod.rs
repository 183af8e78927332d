//! Pokémon API client module.
//!
//! Provides the HTTP client abstraction the BFF uses to look up Pokémon
//! records on the upstream API.
//!
//! # Architecture
//!
//! - [`PokemonApiClient`] - Trait defining the lookup operation
//! - [`HttpPokemonClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockPokemonClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! ```ignore
//! use pokedex_bff::pokeapi::mock::MockPokemonClient;
//!
//! let mock = MockPokemonClient::new();
//! mock.set_result(Ok(record));
//! let router = pokedex_bff::rest::router(Arc::new(mock));
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! let server = MockHttpServer::start().await;
//! server
//!     .expect_get("/pokemon/pikachu")
//!     .respond_with_json(json!({ "name": "pikachu", "id": 25 }))
//!     .mount()
//!     .await;
//!
//! let client = HttpPokemonClient::new(server.url());
//! let record = client.get_pokemon_by_name("pikachu").await?;
//! ```

mod client;
mod types;

pub use client::{HttpPokemonClient, PokemonApiClient, PokemonApiError, LOOKUP_FAILED_MESSAGE};
pub use types::{PokemonRecord, POKEAPI_BASE_URL};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
