//! services/api/src/adapters/catalog.rs
//!
//! The in-memory catalog adapter: the concrete implementation of the
//! `CatalogRepository` port from the `core` crate. The dataset is read from a
//! JSON document once at startup and never changes afterwards, so lookups need
//! no synchronization.

use async_trait::async_trait;
use class_resources_core::domain::{Bookmark, Class, Dataset, Enrollment, Resource, User};
use class_resources_core::ports::{CatalogRepository, PortError, PortResult};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Failures while loading the dataset document.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse dataset file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A read-only catalog held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    users: HashMap<String, User>,
    classes: HashMap<String, Class>,
    resources: Vec<Resource>,
    enrollments: Vec<Enrollment>,
    bookmarks: Vec<Bookmark>,
}

impl InMemoryCatalog {
    /// Indexes a dataset. When two users or classes share a key, the later one wins.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let users = dataset
            .users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        let classes = dataset
            .classes
            .into_iter()
            .map(|class| (class.code.clone(), class))
            .collect();

        Self {
            users,
            classes,
            resources: dataset.resources,
            enrollments: dataset.enrollments,
            bookmarks: dataset.bookmarks,
        }
    }

    /// Parses a dataset document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Reads and parses the dataset document at `path`.
    pub async fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json_str(&raw).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            users = catalog.users.len(),
            classes = catalog.classes.len(),
            resources = catalog.resources.len(),
            enrollments = catalog.enrollments.len(),
            bookmarks = catalog.bookmarks.len(),
            "Dataset loaded from {}",
            path.display()
        );
        Ok(catalog)
    }
}

//=========================================================================================
// `CatalogRepository` Trait Implementation
//=========================================================================================

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn get_user_by_id(&self, user_id: &str) -> PortResult<User> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("User {}", user_id)))
    }

    async fn get_class_by_code(&self, class_code: &str) -> PortResult<Class> {
        self.classes
            .get(class_code)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Class {}", class_code)))
    }

    async fn get_resource_by_id(&self, resource_id: &Value) -> PortResult<Resource> {
        self.resources
            .iter()
            .find(|r| &r.id == resource_id)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("Resource {}", resource_id)))
    }

    async fn get_enrollments_for_user(&self, user_id: &str) -> PortResult<Vec<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn is_enrolled(&self, user_id: &str, class_code: &str) -> PortResult<bool> {
        Ok(self
            .enrollments
            .iter()
            .any(|e| e.user_id == user_id && e.class_code == class_code))
    }

    async fn get_resources_for_class(&self, class_code: &str) -> PortResult<Vec<Resource>> {
        Ok(self
            .resources
            .iter()
            .filter(|r| r.class_code == class_code)
            .cloned()
            .collect())
    }

    async fn count_resources_for_class(&self, class_code: &str) -> PortResult<usize> {
        Ok(self
            .resources
            .iter()
            .filter(|r| r.class_code == class_code)
            .count())
    }

    async fn get_bookmarks_for_user(&self, user_id: &str) -> PortResult<Vec<Bookmark>> {
        Ok(self
            .bookmarks
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> InMemoryCatalog {
        let dataset = json!({
            "users": [
                { "id": "user_123", "name": "An" },
                { "id": "user_123", "name": "An Nguyen" }
            ],
            "classes": [
                { "code": "CS101", "name": "Intro to Programming" },
                { "code": "CS202", "name": "Data Structures" }
            ],
            "resources": [
                { "id": 1, "class_code": "CS101", "title": "Syllabus" },
                { "id": "2", "class_code": "CS202", "title": "Trees" },
                { "id": 3, "class_code": "CS101", "title": "Loops" }
            ],
            "enrollments": [
                { "user_id": "user_123", "class_code": "CS101" },
                { "user_id": "user_456", "class_code": "CS202" }
            ],
            "bookmarks": [
                { "user_id": "user_123", "resource_id": 3, "createdAt": "2024-01-02T08:00:00Z" }
            ]
        });
        InMemoryCatalog::from_json_str(&dataset.to_string()).unwrap()
    }

    #[tokio::test]
    async fn later_duplicate_user_wins() {
        let user = catalog().get_user_by_id("user_123").await.unwrap();
        assert_eq!(user.profile["name"], json!("An Nguyen"));
    }

    #[tokio::test]
    async fn missing_entities_are_not_found() {
        let catalog = catalog();
        assert!(matches!(
            catalog.get_class_by_code("MATH1").await,
            Err(PortError::NotFound(_))
        ));
        assert!(matches!(
            catalog.get_user_by_id("nobody").await,
            Err(PortError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn resource_ids_compare_as_json() {
        let catalog = catalog();
        assert!(catalog.get_resource_by_id(&json!(1)).await.is_ok());
        assert!(catalog.get_resource_by_id(&json!("2")).await.is_ok());
        assert!(catalog.get_resource_by_id(&json!(2)).await.is_err());
    }

    #[tokio::test]
    async fn class_resources_keep_dataset_order() {
        let catalog = catalog();
        let resources = catalog.get_resources_for_class("CS101").await.unwrap();
        let ids: Vec<_> = resources.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(3)]);
        assert_eq!(catalog.count_resources_for_class("CS101").await.unwrap(), 2);
        assert_eq!(catalog.count_resources_for_class("NONE").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn enrollment_checks_match_exact_pair() {
        let catalog = catalog();
        assert!(catalog.is_enrolled("user_123", "CS101").await.unwrap());
        assert!(!catalog.is_enrolled("user_123", "CS202").await.unwrap());
        assert!(!catalog.is_enrolled("user_123", "cs101").await.unwrap());
    }

    #[tokio::test]
    async fn load_reports_missing_file() {
        let err = InMemoryCatalog::load(Path::new("/definitely/not/here.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
