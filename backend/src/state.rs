//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The engine is
//! stateless, so the state only carries configuration and the metrics handle.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// Read-only during request handling; cloning is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus render handle, absent when no recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
