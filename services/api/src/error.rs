//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service.

use crate::adapters::DatasetError;
use crate::config::ConfigError;
use class_resources_core::ports::PortError;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The dataset document could not be loaded at startup.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
