//! REST API handlers and `OpenAPI` documentation.
//!
//! The lookup endpoint forwards one request to the upstream API per inbound
//! call and passes the record through untouched. Every upstream failure is
//! answered with the same 500 envelope.

// The OpenApi derive macro generates code that triggers this lint
#![allow(clippy::needless_for_each)]

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::pokeapi::{PokemonApiClient, PokemonRecord};

/// Message returned to clients whenever a lookup fails.
pub const LOOKUP_ERROR_MESSAGE: &str = "Erro ao buscar Pokémon";

/// Error envelope returned by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Fixed human-readable message; the upstream cause is never exposed
    pub error: String,
}

impl ErrorResponse {
    /// The envelope sent for any failed lookup.
    #[must_use]
    pub fn lookup_failed() -> Self {
        Self {
            error: LOOKUP_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// `OpenAPI` documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokédex BFF",
        version = "1.0.0",
        description = "Backend-for-frontend proxying Pokémon lookups to PokéAPI",
        license(name = "MIT")
    ),
    paths(get_pokemon, health_check),
    components(schemas(ErrorResponse))
)]
pub struct ApiDoc;

/// Build the lookup routes around an explicitly supplied client.
///
/// Each call returns an independent router; nothing is shared between
/// instances besides what the caller passes in.
pub fn router(client: Arc<dyn PokemonApiClient>) -> Router {
    Router::new()
        .route("/pokemon/{name}", get(get_pokemon))
        .route("/health", get(health_check))
        .layer(Extension(client))
}

/// Look up a Pokémon by name
///
/// Proxies the record from the upstream API unchanged.
///
/// # Errors
///
/// Returns `ErrorResponse` with status 500 when the upstream lookup fails for any reason.
#[utoipa::path(
    get,
    path = "/pokemon/{name}",
    tag = "Pokemon",
    params(("name" = String, Path, description = "Pokémon name or numeric id, forwarded verbatim")),
    responses(
        (status = 200, description = "Upstream record, passed through unchanged"),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    )
)]
pub async fn get_pokemon(
    Extension(client): Extension<Arc<dyn PokemonApiClient>>,
    Path(name): Path<String>,
) -> Result<Json<PokemonRecord>, ErrorResponse> {
    match client.get_pokemon_by_name(&name).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => {
            tracing::error!(error = %e, %name, "pokemon lookup failed");
            Err(ErrorResponse::lookup_failed())
        }
    }
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service is up"))
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
