//! Common test utilities for integration tests.
//!
//! This module provides:
//!
//! - [`app_builder::TestAppBuilder`] - Build test Axum apps through the same
//!   `build_app` wiring as main.rs, with an injectable upstream client
//! - [`http_mock::MockHttpServer`] - Declarative HTTP stubs for the upstream
//!   API (or for the BFF itself, when testing the client view)
//! - [`log_capture::LogCapture`] - Record the crate's `tracing` events
//!
//! # App Builder Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_app() {
//!     let app = TestAppBuilder::new().build();
//!     // Use app.oneshot(...) to send requests
//! }
//! ```

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod http_mock;
pub mod log_capture;

use serde_json::Value;

/// Convert a `json!` literal into a `PokemonRecord`.
#[allow(clippy::expect_used)]
pub fn record(value: Value) -> pokedex_bff::pokeapi::PokemonRecord {
    serde_json::from_value(value).expect("test record must be a JSON object")
}
