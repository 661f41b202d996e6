//! crates/class_resources_core/src/ports.rs
//!
//! Defines the service contracts (traits) the catalog logic is written against.
//! The HTTP service provides the concrete implementations: an in-memory catalog
//! loaded from the dataset file and a store reading resource files from disk.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use serde_json::Value;
use std::pin::Pin;

use crate::domain::{Bookmark, Class, Enrollment, Resource, User};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

/// A chunked stream of file contents.
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send>>;

/// A file opened by a [`ResourceFileStore`], ready to be streamed.
pub struct StoredFile {
    pub size: u64,
    pub body: ByteStream,
}

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // --- Single-entity lookups (fail with `NotFound`) ---
    async fn get_user_by_id(&self, user_id: &str) -> PortResult<User>;

    async fn get_class_by_code(&self, class_code: &str) -> PortResult<Class>;

    async fn get_resource_by_id(&self, resource_id: &Value) -> PortResult<Resource>;

    // --- Enrollments ---
    async fn get_enrollments_for_user(&self, user_id: &str) -> PortResult<Vec<Enrollment>>;

    async fn is_enrolled(&self, user_id: &str, class_code: &str) -> PortResult<bool>;

    // --- Resources (dataset order) ---
    async fn get_resources_for_class(&self, class_code: &str) -> PortResult<Vec<Resource>>;

    async fn count_resources_for_class(&self, class_code: &str) -> PortResult<usize>;

    // --- Bookmarks ---
    async fn get_bookmarks_for_user(&self, user_id: &str) -> PortResult<Vec<Bookmark>>;
}

#[async_trait]
pub trait ResourceFileStore: Send + Sync {
    /// Opens a resource file by its name relative to the store's root.
    ///
    /// Implementations return `NotFound` for anything that is not an existing
    /// regular file and `BadRequest` for names resolving outside the root.
    async fn open(&self, filename: &str) -> PortResult<StoredFile>;
}
