//! # Local Disk Object Store
//!
//! Directory-backed [`ObjectStore`] adapter. Buckets map to subdirectories of
//! a root path; objects to files within them. Used as the reference adapter
//! in development and tests; cloud-backed adapters live outside this crate.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::{CapabilityError, CapabilityResult, ObjectStore};

/// Object store writing to the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, name: &str) -> PathBuf {
        self.root.join(bucket).join(name)
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn fetch(&self, bucket: &str, name: &str) -> CapabilityResult<Vec<u8>> {
        let path = self.object_path(bucket, name);
        debug!(bucket = %bucket, name = %name, "Fetching object from local store");

        fs::read(&path)
            .await
            .map_err(|e| CapabilityError::storage(bucket, name, e.to_string()))
    }

    async fn write(&self, bucket: &str, name: &str, bytes: &[u8]) -> CapabilityResult<()> {
        let path = self.object_path(bucket, name);
        debug!(bucket = %bucket, name = %name, size = bytes.len(), "Writing object to local store");

        // Object names may contain path separators (carried through from the
        // source filename without escaping), so the parent is derived from the
        // full object path rather than the bucket directory.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CapabilityError::storage(bucket, name, e.to_string()))?;
        }

        fs::write(&path, bytes)
            .await
            .map_err(|e| CapabilityError::storage(bucket, name, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path());

        store
            .write("results", "wakeupcat.jpg_to_es.txt", b"Wake up human!")
            .await
            .unwrap();

        let bytes = store.fetch("results", "wakeupcat.jpg_to_es.txt").await.unwrap();
        assert_eq!(bytes, b"Wake up human!");
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path());

        store.write("results", "a.txt", b"first").await.unwrap();
        store.write("results", "a.txt", b"second").await.unwrap();

        let bytes = store.fetch("results", "a.txt").await.unwrap();
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn test_fetch_missing_object_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path());

        let err = store.fetch("results", "nope.txt").await.unwrap_err();
        assert!(matches!(err, CapabilityError::Storage { .. }));
    }
}
