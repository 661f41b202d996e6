//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// The JSON dataset loaded once at startup.
    pub data_path: PathBuf,
    /// Directory resource files are served from.
    pub resources_dir: PathBuf,
    /// The single origin allowed to make credentialed cross-origin requests.
    pub cors_origin: HeaderValue,
    /// Identity every request is served as until a real session layer exists.
    pub current_user_id: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Server Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin_str =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());
        let cors_origin = cors_origin_str.parse::<HeaderValue>().map_err(|e| {
            ConfigError::InvalidValue("CORS_ORIGIN".to_string(), e.to_string())
        })?;

        // --- Dataset Settings ---
        let data_path = lookup("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/resources.json"));

        let resources_dir = lookup("RESOURCES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_resources_dir(&data_path));

        // --- Identity ---
        let current_user_id = lookup("CURRENT_USER_ID").unwrap_or_else(|| "user_123".to_string());
        if current_user_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "CURRENT_USER_ID".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            bind_address,
            log_level,
            data_path,
            resources_dir,
            cors_origin,
            current_user_id,
        })
    }
}

/// Resource files live in a `resources` directory next to the dataset file.
fn default_resources_dir(data_path: &Path) -> PathBuf {
    data_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("resources")
}
