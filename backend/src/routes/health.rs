//! Health check and metrics endpoints
//!
//! - /health - Basic health check
//! - /health/live - Liveness probe (always returns OK if server is running)
//! - /metrics - Prometheus exposition

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness probe - checks if the service is alive
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Render Prometheus metrics, 404 when no recorder is installed
pub async fn metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| ApiError::NotFound("Metrics are disabled".to_string()))
}
