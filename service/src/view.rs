//! Client-side view over the BFF lookup endpoint.
//!
//! [`PokemonView`] holds at most one record. Mounting it fetches the default
//! Pokémon; later fetches overwrite the slot. Failures never reach the
//! caller: they are logged and leave the slot empty.
//!
//! ```ignore
//! use pokedex_bff::view::PokemonView;
//!
//! let view = PokemonView::new("http://localhost:3000");
//! view.mount().await;
//! println!("{}", view.display_name());
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use thiserror::Error;

use crate::pokeapi::PokemonRecord;

/// BFF address the view talks to unless told otherwise.
pub const DEFAULT_BFF_URL: &str = "http://localhost:3000";

/// Name fetched when the view is mounted.
pub const DEFAULT_POKEMON: &str = "pikachu";

/// Why a fetch from the BFF failed.
#[derive(Debug, Error)]
#[error("Erro ao buscar Pokémon: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// Lifecycle of the view. `Failed` looks like `Idle` from the outside
/// (no record); only the log line tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Result of one `fetch_pokemon` call.
#[derive(Debug)]
pub enum FetchOutcome {
    Loaded,
    Failed(FetchError),
}

impl FetchOutcome {
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

#[derive(Debug)]
struct ViewState {
    pokemon: Option<PokemonRecord>,
    phase: ViewPhase,
}

/// A single-record view backed by the BFF.
#[derive(Debug)]
pub struct PokemonView {
    client: reqwest::Client,
    base_url: String,
    state: Mutex<ViewState>,
}

impl PokemonView {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            state: Mutex::new(ViewState {
                pokemon: None,
                phase: ViewPhase::Idle,
            }),
        }
    }

    /// Activate the view: fetch [`DEFAULT_POKEMON`] once.
    pub async fn mount(&self) -> FetchOutcome {
        self.fetch_pokemon(DEFAULT_POKEMON).await
    }

    /// Fetch `name` from the BFF and store the result.
    ///
    /// Re-entrant: overlapping calls are not cancelled, and whichever
    /// response resolves last ends up in the slot.
    pub async fn fetch_pokemon(&self, name: &str) -> FetchOutcome {
        self.lock().phase = ViewPhase::Loading;

        match self.request(name).await {
            Ok(record) => {
                let mut state = self.lock();
                state.pokemon = Some(record);
                state.phase = ViewPhase::Loaded;
                FetchOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(error = %e.0, %name, "Erro ao buscar Pokémon:");
                let mut state = self.lock();
                state.pokemon = None;
                state.phase = ViewPhase::Failed;
                FetchOutcome::Failed(e)
            }
        }
    }

    async fn request(&self, name: &str) -> Result<PokemonRecord, FetchError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let record = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<PokemonRecord>()
            .await?;
        Ok(record)
    }

    /// Snapshot of the current record, if any.
    #[must_use]
    pub fn pokemon(&self) -> Option<PokemonRecord> {
        self.lock().pokemon.clone()
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.lock().phase
    }

    /// Capitalized `name` of the current record, or `""`.
    #[must_use]
    pub fn display_name(&self) -> String {
        let state = self.lock();
        capitalize(
            state
                .pokemon
                .as_ref()
                .and_then(|p| p.get("name"))
                .and_then(Value::as_str),
        )
    }

    /// Plain-text detail card for the current record.
    #[must_use]
    pub fn render(&self) -> String {
        let state = self.lock();
        state
            .pokemon
            .as_ref()
            .map_or_else(|| "No Pokémon loaded".to_string(), render_record)
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Upper-case the first character, leaving the rest untouched.
///
/// `None` and `""` both give `""`.
#[must_use]
pub fn capitalize(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn render_record(record: &PokemonRecord) -> String {
    let name = capitalize(record.get("name").and_then(Value::as_str));
    let mut lines = vec![format!("Name: {name}")];

    for field in ["id", "height", "weight"] {
        if let Some(value) = record.get(field).filter(|v| !v.is_null()) {
            lines.push(format!("{}: {value}", capitalize(Some(field))));
        }
    }

    // PokéAPI nests names as `types[].type.name`; mocked records use a flat `type`.
    let types = nested_names(record, "types", "type");
    if !types.is_empty() {
        lines.push(format!("Types: {}", types.join(", ")));
    } else if let Some(kind) = record.get("type").and_then(Value::as_str) {
        lines.push(format!("Type: {}", capitalize(Some(kind))));
    }

    let abilities = nested_names(record, "abilities", "ability");
    if !abilities.is_empty() {
        lines.push(format!("Abilities: {}", abilities.join(", ")));
    }

    lines.join("\n")
}

fn nested_names(record: &PokemonRecord, list: &str, entry: &str) -> Vec<String> {
    record
        .get(list)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get(entry)?.get("name")?.as_str())
                .map(|name| capitalize(Some(name)))
                .collect()
        })
        .unwrap_or_default()
}
