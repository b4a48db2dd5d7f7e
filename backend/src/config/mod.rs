//! Configuration management for the Nutrition Tracker backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest number of food entries accepted in one request
    pub max_entries_per_request: usize,
    pub request_timeout_secs: u64,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            limits: LimitsConfig {
                max_entries_per_request: 500,
                request_timeout_secs: 30,
            },
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (NT__ prefix)
            // e.g., NT__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("NT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Problems that make this configuration unusable
    pub fn validation_errors(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();
        if self.limits.max_entries_per_request == 0 {
            errors.push("limits.max_entries_per_request must be greater than 0");
        }
        if self.limits.request_timeout_secs == 0 {
            errors.push("limits.request_timeout_secs must be greater than 0");
        }
        errors
    }
}
