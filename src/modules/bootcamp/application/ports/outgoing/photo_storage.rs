use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
#[error("Photo could not be stored: {0}")]
pub struct PhotoStorageError(pub String);

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), PhotoStorageError>;
}
