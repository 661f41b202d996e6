//! services/api/src/adapters/file_store.rs
//!
//! Serves resource files from a directory on disk. This is the concrete
//! implementation of the `ResourceFileStore` port.

use async_trait::async_trait;
use class_resources_core::ports::{PortError, PortResult, ResourceFileStore, StoredFile};
use std::path::PathBuf;
use tokio_util::io::ReaderStream;
use tracing::{error, warn};

/// A file store rooted at the resources directory.
#[derive(Clone, Debug)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn not_found() -> PortError {
    PortError::NotFound("File not found".to_string())
}

#[async_trait]
impl ResourceFileStore for DiskFileStore {
    async fn open(&self, filename: &str) -> PortResult<StoredFile> {
        // Anything that cannot be resolved is reported as absent.
        let root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(|_| not_found())?;
        let resolved = tokio::fs::canonicalize(root.join(filename))
            .await
            .map_err(|_| not_found())?;

        if !resolved.starts_with(&root) {
            warn!("Rejected '{}': resolves outside the resources directory", filename);
            return Err(PortError::BadRequest("Invalid filename".to_string()));
        }

        let metadata = tokio::fs::metadata(&resolved)
            .await
            .map_err(|_| not_found())?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        let file = tokio::fs::File::open(&resolved).await.map_err(|e| {
            error!("Failed to open {}: {:?}", resolved.display(), e);
            PortError::Unexpected(format!("Failed to open {}", filename))
        })?;

        Ok(StoredFile {
            size: metadata.len(),
            body: Box::pin(ReaderStream::new(file)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn opens_existing_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

        let file = DiskFileStore::new(dir.path()).open("notes.txt").await.unwrap();
        assert_eq!(file.size, 5);
    }

    #[tokio::test]
    async fn missing_file_and_directories_are_not_found() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("week1")).unwrap();
        let store = DiskFileStore::new(dir.path());

        assert!(matches!(store.open("absent.pdf").await, Err(PortError::NotFound(_))));
        assert!(matches!(store.open("week1").await, Err(PortError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_root_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = DiskFileStore::new(dir.path().join("does-not-exist"));
        assert!(matches!(store.open("a.txt").await, Err(PortError::NotFound(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlink_escaping_root_is_rejected() {
        let outside = TempDir::new().unwrap();
        std::fs::write(outside.path().join("secret.txt"), "s3cr3t").unwrap();
        let root = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            outside.path().join("secret.txt"),
            root.path().join("link.txt"),
        )
        .unwrap();

        let result = DiskFileStore::new(root.path()).open("link.txt").await;
        assert!(matches!(result, Err(PortError::BadRequest(_))));
    }
}
