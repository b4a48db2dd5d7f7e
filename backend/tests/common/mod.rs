//! Common test utilities for integration tests
//!
//! This module provides a router wired exactly like the server binary,
//! without a metrics recorder.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nutrition_tracker_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config, None);
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    #[allow(dead_code)]
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    #[allow(dead_code)]
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: nutrition_tracker_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        limits: nutrition_tracker_backend::config::LimitsConfig {
            max_entries_per_request: 50,
            request_timeout_secs: 5,
        },
        metrics: nutrition_tracker_backend::config::MetricsConfig { enabled: false },
    }
}
