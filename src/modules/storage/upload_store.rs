use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};
use crate::modules::storage::ObjectStore;
use crate::shared::multipart::FilePart;
use crate::shared::validation::sanitize_filename;

/// Which storage path actually persisted an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOutcome {
    /// Stored in the remote object store; the reference is a full URL
    Remote,
    /// Stored under the local upload root; the reference is a relative path
    Local,
    /// Remote upload failed and the bytes landed locally instead
    LocalFallback,
}

/// Result of persisting one upload: the stable reference a catalog row
/// stores verbatim, plus the path taken to produce it.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub reference: String,
    pub outcome: StorageOutcome,
}

/// Storage backend selector. Persists one uploaded file under a logical
/// category and returns a [`StoredUpload`], writing remotely when an object
/// store is configured and falling back to the local tree when that fails.
pub struct UploadStore {
    local_root: PathBuf,
    remote: Option<Arc<dyn ObjectStore>>,
}

impl UploadStore {
    pub fn local(local_root: impl Into<PathBuf>) -> Self {
        Self {
            local_root: local_root.into(),
            remote: None,
        }
    }

    pub fn with_remote(local_root: impl Into<PathBuf>, remote: Arc<dyn ObjectStore>) -> Self {
        Self {
            local_root: local_root.into(),
            remote: Some(remote),
        }
    }

    pub fn local_root(&self) -> &PathBuf {
        &self.local_root
    }

    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Persist one uploaded part under `category`.
    ///
    /// Returns `Ok(None)` when the part's filename sanitizes to nothing (an
    /// empty file input on the form). The key is
    /// `{category}/{unix-timestamp}_{sanitized-filename}`; the timestamp
    /// prefix keeps repeated uploads of the same name apart across seconds.
    /// Two uploads of the same name within the same second target the same
    /// key and the second overwrites the first.
    pub async fn store(&self, category: &str, part: &FilePart) -> Result<Option<StoredUpload>> {
        let filename = sanitize_filename(&part.filename);
        if filename.is_empty() {
            return Ok(None);
        }

        let key = format!("{}/{}_{}", category, Utc::now().timestamp(), filename);

        if let Some(remote) = &self.remote {
            match remote.put(&key, &part.data, &part.content_type).await {
                Ok(url) => {
                    debug!("Stored '{}' remotely as {}", key, url);
                    return Ok(Some(StoredUpload {
                        reference: url,
                        outcome: StorageOutcome::Remote,
                    }));
                }
                Err(e) => {
                    warn!("Remote upload of '{}' failed, falling back to local: {}", key, e);
                    let reference = self.write_local(&key, &part.data).await?;
                    return Ok(Some(StoredUpload {
                        reference,
                        outcome: StorageOutcome::LocalFallback,
                    }));
                }
            }
        }

        let reference = self.write_local(&key, &part.data).await?;
        Ok(Some(StoredUpload {
            reference,
            outcome: StorageOutcome::Local,
        }))
    }

    /// Write the bytes under the local root. The key already uses forward
    /// slashes and a sanitized filename, and that exact string is the
    /// reference regardless of host OS. Errors here are fatal for the
    /// request: there is no further fallback.
    async fn write_local(&self, key: &str, data: &[u8]) -> Result<String> {
        let dest = self.local_root.join(key);
        let dest_dir = dest
            .parent()
            .ok_or_else(|| AppError::Storage(format!("Invalid storage key '{}'", key)))?;

        tokio::fs::create_dir_all(dest_dir)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create '{}': {}", dest_dir.display(), e)))?;

        tokio::fs::write(&dest, data)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write '{}': {}", dest.display(), e)))?;

        debug!("Stored '{}' locally under {}", key, self.local_root.display());
        Ok(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn part(filename: &str, data: &[u8]) -> FilePart {
        FilePart {
            filename: filename.to_string(),
            content_type: "image/png".to_string(),
            data: data.to_vec(),
        }
    }

    /// Object store double that records puts and returns a fixed URL shape
    struct RecordingStore {
        puts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ObjectStore for RecordingStore {
        async fn put(&self, key: &str, _data: &[u8], _content_type: &str) -> Result<String> {
            self.puts.lock().unwrap().push(key.to_string());
            Ok(self.public_url(key))
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://bucket.s3.amazonaws.com/{}", key)
        }
    }

    /// Object store double whose uploads always fail, as a network error would
    struct FailingStore;

    #[async_trait]
    impl ObjectStore for FailingStore {
        async fn put(&self, key: &str, _data: &[u8], _content_type: &str) -> Result<String> {
            Err(AppError::Storage(format!("connection refused for '{}'", key)))
        }

        fn public_url(&self, key: &str) -> String {
            format!("https://bucket.s3.amazonaws.com/{}", key)
        }
    }

    #[tokio::test]
    async fn test_local_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::local(dir.path());

        let stored = store
            .store("phones", &part("a.png", b"png-bytes"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.outcome, StorageOutcome::Local);
        assert!(stored.reference.starts_with("phones/"));
        assert!(stored.reference.ends_with("_a.png"));
        assert!(!stored.reference.contains('\\'));

        let on_disk = tokio::fs::read(dir.path().join(&stored.reference))
            .await
            .unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn test_empty_filename_is_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::local(dir.path());

        assert!(store.store("phones", &part("", b"x")).await.unwrap().is_none());
        assert!(store.store("phones", &part("..", b"x")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_traversal_stays_under_category() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::local(dir.path());

        let stored = store
            .store("designs", &part("../../etc/passwd", b"x"))
            .await
            .unwrap()
            .unwrap();

        assert!(stored.reference.starts_with("designs/"));
        assert!(stored.reference.ends_with("_passwd"));
        assert!(dir.path().join(&stored.reference).exists());
    }

    #[tokio::test]
    async fn test_remote_success_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let remote = Arc::new(RecordingStore {
            puts: Mutex::new(Vec::new()),
        });
        let store = UploadStore::with_remote(dir.path(), remote.clone());

        let stored = store
            .store("videos", &part("clip.mp4", b"mp4"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.outcome, StorageOutcome::Remote);
        assert!(stored.reference.starts_with("https://bucket.s3.amazonaws.com/videos/"));
        assert_eq!(remote.puts.lock().unwrap().len(), 1);
        // Nothing written locally on the remote path
        assert!(!dir.path().join("videos").exists());
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_local() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::with_remote(dir.path(), Arc::new(FailingStore));

        let stored = store
            .store("designs", &part("x.png", b"bytes"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.outcome, StorageOutcome::LocalFallback);
        assert!(stored.reference.starts_with("designs/"));
        let on_disk = tokio::fs::read(dir.path().join(&stored.reference))
            .await
            .unwrap();
        assert_eq!(on_disk, b"bytes");
    }

    #[tokio::test]
    async fn test_reference_resolves_through_serving_route() {
        use axum::Router;
        use axum_test::TestServer;
        use tower_http::services::ServeDir;

        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::local(dir.path());

        let stored = store
            .store("phones", &part("a.png", b"exact-bytes"))
            .await
            .unwrap()
            .unwrap();

        let app = Router::new().nest_service("/uploads", ServeDir::new(dir.path()));
        let server = TestServer::new(app).unwrap();

        let response = server.get(&format!("/uploads/{}", stored.reference)).await;
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), b"exact-bytes");

        let missing = server.get("/uploads/phones/0_missing.png").await;
        missing.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_same_second_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::local(dir.path());

        let first = store
            .store("designs", &part("x.png", b"first"))
            .await
            .unwrap()
            .unwrap();
        let second = store
            .store("designs", &part("x.png", b"second"))
            .await
            .unwrap()
            .unwrap();

        // Within one second the keys collide and the second write wins;
        // across a second boundary the keys differ and both files exist.
        if first.reference == second.reference {
            let on_disk = tokio::fs::read(dir.path().join(&first.reference))
                .await
                .unwrap();
            assert_eq!(on_disk, b"second");
        } else {
            assert!(dir.path().join(&first.reference).exists());
            assert!(dir.path().join(&second.reference).exists());
        }
    }
}
