//! Durable storage for uploaded images
//!
//! Files are persisted under a dedicated directory and served back at
//! `/uploads/<name>`. Deletion is best-effort: it runs on a detached task
//! and failures are only logged, never surfaced to the caller.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// A stored image: its generated file name and public URL
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub file_name: String,
    pub url: String,
}

/// Media store over a local filesystem directory
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
    public_base_url: String,
}

impl MediaStore {
    /// Create a new media store
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self {
            root,
            public_base_url: public_base_url.into(),
        }
    }

    /// Directory the store persists files under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the storage directory exists
    pub async fn init(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Persist uploaded bytes under a generated name and return its URL
    ///
    /// The generated name keeps the extension of the uploaded file so the
    /// static file service can infer a content type.
    pub async fn save(&self, original_name: Option<&str>, bytes: &[u8]) -> Result<StoredImage> {
        let file_name = match original_name.and_then(|n| Path::new(n).extension()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_string_lossy()),
            None => Uuid::new_v4().to_string(),
        };

        let path = self.root.join(&file_name);
        tokio::fs::write(&path, bytes).await?;
        info!("Stored uploaded image as {}", file_name);

        let url = format!(
            "{}/uploads/{}",
            self.public_base_url.trim_end_matches('/'),
            file_name
        );

        Ok(StoredImage { file_name, url })
    }

    /// Remove a stored file by name
    pub async fn delete_file(&self, file_name: &str) -> Result<()> {
        let path = self.root.join(file_name);
        tokio::fs::remove_file(path).await?;
        Ok(())
    }

    /// Best-effort deletion of the file an image URL points at
    ///
    /// Runs on a detached task so it never blocks or fails the parent
    /// operation; a failure is logged and the stale file stays behind.
    pub fn schedule_delete(&self, image_url: &str) {
        let Some(file_name) = image_url.rsplit('/').next().filter(|n| !n.is_empty()) else {
            return;
        };

        let store = self.clone();
        let file_name = file_name.to_string();
        tokio::spawn(async move {
            if let Err(e) = store.delete_file(&file_name).await {
                warn!("Failed to delete image file {}: {}", file_name, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn temp_store() -> MediaStore {
        let root = std::env::temp_dir().join(format!("media-store-test-{}", Uuid::new_v4()));
        MediaStore::new(root, "http://localhost:5555")
    }

    #[tokio::test]
    async fn test_save_writes_bytes_and_builds_url() {
        let store = temp_store();
        store.init().await.unwrap();

        let stored = store.save(Some("cover.png"), b"png-bytes").await.unwrap();
        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(
            stored.url,
            format!("http://localhost:5555/uploads/{}", stored.file_name)
        );

        let on_disk = tokio::fs::read(store.root().join(&stored.file_name))
            .await
            .unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn test_save_without_extension() {
        let store = temp_store();
        store.init().await.unwrap();

        let stored = store.save(None, b"bytes").await.unwrap();
        assert!(!stored.file_name.contains('.'));
    }

    #[tokio::test]
    async fn test_delete_file_removes() {
        let store = temp_store();
        store.init().await.unwrap();

        let stored = store.save(Some("cover.jpg"), b"bytes").await.unwrap();
        store.delete_file(&stored.file_name).await.unwrap();
        assert!(!store.root().join(&stored.file_name).exists());
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_error() {
        let store = temp_store();
        store.init().await.unwrap();

        assert!(store.delete_file("no-such-file.png").await.is_err());
    }

    #[tokio::test]
    async fn test_schedule_delete_eventually_removes() {
        let store = temp_store();
        store.init().await.unwrap();

        let stored = store.save(Some("cover.png"), b"bytes").await.unwrap();
        store.schedule_delete(&stored.url);

        let path = store.root().join(&stored.file_name);
        for _ in 0..50 {
            if !path.exists() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("scheduled deletion never removed {}", stored.file_name);
    }

    #[tokio::test]
    async fn test_schedule_delete_of_missing_file_does_not_panic() {
        let store = temp_store();
        store.init().await.unwrap();

        store.schedule_delete("http://localhost:5555/uploads/ghost.png");
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
