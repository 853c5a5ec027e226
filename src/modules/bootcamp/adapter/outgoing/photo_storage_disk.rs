use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::bootcamp::application::ports::outgoing::{PhotoStorage, PhotoStorageError};

/// Writes photos under the configured upload directory.
#[derive(Debug, Clone)]
pub struct DiskPhotoStorage {
    root: PathBuf,
}

impl DiskPhotoStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl PhotoStorage for DiskPhotoStorage {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), PhotoStorageError> {
        // Bare file names only.
        if file_name.contains(['/', '\\']) || file_name.starts_with('.') {
            return Err(PhotoStorageError(format!("refusing file name {}", file_name)));
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| PhotoStorageError(format!("{}: {}", self.root.display(), e)))?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| PhotoStorageError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), size = bytes.len(), "Photo written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("devcamper-uploads-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_save_creates_directory_and_file() {
        let root = scratch_dir();
        let storage = DiskPhotoStorage::new(&root);

        storage
            .save("photo_abc.jpg", vec![1, 2, 3])
            .await
            .unwrap();

        let written = tokio::fs::read(root.join("photo_abc.jpg")).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_path_like_names_are_refused() {
        let storage = DiskPhotoStorage::new(scratch_dir());

        assert!(storage.save("../escape.jpg", vec![0]).await.is_err());
        assert!(storage.save(".hidden", vec![0]).await.is_err());
    }
}
