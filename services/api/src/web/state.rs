//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use class_resources_core::ports::{CatalogRepository, ResourceFileStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub files: Arc<dyn ResourceFileStore>,
    pub config: Arc<Config>,
}
