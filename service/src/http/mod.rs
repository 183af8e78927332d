//! HTTP utilities and application assembly.
//!
//! [`build_app`] is the single place the production router is put
//! together; `main.rs` and the integration tests both go through it.

pub mod cors;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::pokeapi::PokemonApiClient;
use crate::rest::{self, ApiDoc};

pub use cors::build_cors_layer;

/// Assemble the full application router.
///
/// Layer order (innermost first): lookup routes, optional Swagger UI,
/// request tracing, CORS.
pub fn build_app(client: Arc<dyn PokemonApiClient>, config: &Config) -> Router {
    let mut app = rest::router(client);

    if config.swagger.enabled {
        tracing::info!("Swagger UI enabled at /swagger-ui");
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app.layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors))
}
