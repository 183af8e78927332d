//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to stand in for PokéAPI when testing the fetch
//! adapter, or for the BFF when testing the client view.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/pokemon/pikachu")
//!         .respond_with_json(json!({"name": "pikachu"}))
//!         .expect_times(1)
//!         .mount()
//!         .await;
//!
//!     // Point the code under test at server.url()
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Slow response**: `.respond_with_delay(Duration::from_millis(200))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
pub use wiremock::matchers::{method, path};
pub use wiremock::MockServer as WiremockServer;
pub use wiremock::{Mock, ResponseTemplate};

/// A running stub server.
pub struct MockHttpServer {
    server: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: WiremockServer::start().await,
        }
    }

    /// Base URL of the server, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Access the underlying `wiremock` server for matchers not wrapped here.
    pub fn inner(&self) -> &WiremockServer {
        &self.server
    }

    /// Start stubbing a GET on `path`. Responds 200 with no body by default.
    pub fn expect_get(&self, path: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: &self.server,
            path: path.to_string(),
            status: 200,
            body: None,
            raw_body: None,
            delay: None,
            times: None,
        }
    }

    /// Panic if any mounted `expect_times` expectation was not met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Paths of every request received so far, in arrival order.
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

/// Builder for a single GET stub.
#[must_use]
pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    path: String,
    status: u16,
    body: Option<Value>,
    raw_body: Option<String>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl StubBuilder<'_> {
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.raw_body = Some(body.into());
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Attach a JSON body to a non-200 response.
    pub fn with_json_response(self, body: Value) -> Self {
        self.respond_with_json(body)
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut template = ResponseTemplate::new(self.status);
        if let Some(body) = &self.body {
            template = template.set_body_json(body);
        } else if let Some(body) = self.raw_body {
            template = template.set_body_string(body);
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = Mock::given(method("GET"))
            .and(path(self.path.as_str()))
            .respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
