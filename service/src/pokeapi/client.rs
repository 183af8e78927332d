//! Pokémon API client for looking up records by name.
//!
//! The trait abstraction lets the REST layer run against a mock in unit
//! tests and against a `wiremock` server in integration tests.
//!
//! # Example
//!
//! ```ignore
//! use pokedex_bff::pokeapi::{HttpPokemonClient, PokemonApiClient};
//!
//! let client = HttpPokemonClient::default();
//! let record = client.get_pokemon_by_name("pikachu").await?;
//! println!("Found: {}", record["name"]);
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::types::{PokemonRecord, POKEAPI_BASE_URL};

/// Message carried by every failed upstream lookup.
pub const LOOKUP_FAILED_MESSAGE: &str = "Erro ao buscar dados do Pokémon";

/// Errors that can occur when calling the Pokémon API.
///
/// Every upstream failure mode (non-2xx status, connection error, body that
/// is not a JSON object) collapses into [`PokemonApiError::LookupFailed`].
/// Callers cannot tell "not found" apart from "upstream unreachable".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokemonApiError {
    #[error("Erro ao buscar dados do Pokémon")]
    LookupFailed,
}

/// Trait for Pokémon API operations.
#[async_trait]
pub trait PokemonApiClient: Send + Sync {
    /// Fetch a single record by name (or numeric id), unmodified.
    ///
    /// Exactly one upstream request is made per call: no retries, no cache.
    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonRecord, PokemonApiError>;
}

/// HTTP-based implementation of `PokemonApiClient`.
#[derive(Debug, Clone)]
pub struct HttpPokemonClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPokemonClient {
    /// Create a new client against the given API root (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a custom `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// API root this client sends lookups to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }
}

impl Default for HttpPokemonClient {
    fn default() -> Self {
        Self::new(POKEAPI_BASE_URL)
    }
}

#[async_trait]
impl PokemonApiClient for HttpPokemonClient {
    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonRecord, PokemonApiError> {
        let url = self.pokemon_url(name);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, %url, "upstream request failed");
            PokemonApiError::LookupFailed
        })?;

        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), %url, "upstream returned error status");
            return Err(PokemonApiError::LookupFailed);
        }

        response.json::<PokemonRecord>().await.map_err(|e| {
            tracing::warn!(error = %e, %url, "upstream body is not a JSON object");
            PokemonApiError::LookupFailed
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{PokemonApiClient, PokemonApiError, PokemonRecord};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `PokemonApiClient` for unit tests.
    ///
    /// Configure the response with `set_result` and verify calls with
    /// `calls()`. Unconfigured mocks fail every lookup.
    pub struct MockPokemonClient {
        result: Mutex<Option<Result<PokemonRecord, PokemonApiError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPokemonClient {
        pub fn new() -> Self {
            Self {
                result: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result returned by every `get_pokemon_by_name` call.
        pub fn set_result(&self, result: Result<PokemonRecord, PokemonApiError>) {
            *self.result.lock().unwrap() = Some(result);
        }

        /// Get all names passed to `get_pokemon_by_name`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockPokemonClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl PokemonApiClient for MockPokemonClient {
        async fn get_pokemon_by_name(
            &self,
            name: &str,
        ) -> Result<PokemonRecord, PokemonApiError> {
            self.calls.lock().unwrap().push(name.to_string());

            self.result
                .lock()
                .unwrap()
                .clone()
                .unwrap_or(Err(PokemonApiError::LookupFailed))
        }
    }
}
