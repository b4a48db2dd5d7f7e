//! Nutrition Tracker Backend
//!
//! Serves the nutrition engine over HTTP.
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and routing
//! - Services: request limits, logging and metrics around the engine
//! - Shared crate: the pure goal and aggregation calculations
//!
//! Nothing is stored; every request carries the profile and food log it needs.

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use nutrition_tracker_backend::{config, routes, state::AppState};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Nutrition Tracker Backend"
    );

    validate_config(&config)?;

    let metrics = if config.metrics.enabled {
        install_metrics_recorder()
    } else {
        None
    };

    // Create application state
    let state = AppState::new(config.clone(), metrics);

    // Build application
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Install the global Prometheus recorder
///
/// Returns None if installation fails, allowing the app to run without metrics
fn install_metrics_recorder() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("Prometheus metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            warn!("Failed to install metrics recorder: {}. Metrics will be disabled.", e);
            None
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "nutrition_tracker_backend=info,tower_http=info".into()
        } else {
            "nutrition_tracker_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Reject configuration the server cannot run with
fn validate_config(config: &config::AppConfig) -> Result<()> {
    let errors = config.validation_errors();

    if config::AppConfig::is_production() && config.server.host == "127.0.0.1" {
        warn!("Server host is 127.0.0.1 - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
