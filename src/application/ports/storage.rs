use crate::application::ApplicationResult;
use crate::domain::document::StoredFile;
use async_trait::async_trait;
use bytes::Bytes;

/// An uploaded file held in memory until it is stored.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FileUpload {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persists the bytes and returns the key they can be found under.
    async fn store(&self, upload: &FileUpload) -> ApplicationResult<StoredFile>;

    /// Removing a key that does not exist is not an error.
    async fn remove(&self, key: &str) -> ApplicationResult<()>;
}
