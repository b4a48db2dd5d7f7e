//! Route definitions for the Nutrition Tracker API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod nutrition;


pub use nutrition::nutrition_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().limits.request_timeout_secs);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(health::metrics))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Nutrition Tracker API v1" }))
        .merge(nutrition::nutrition_routes())
}
