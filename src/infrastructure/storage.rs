// src/infrastructure/storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{FileStorage, FileUpload},
};
use crate::domain::document::StoredFile;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const UPLOAD_PREFIX: &str = "uploads";

/// Writes uploads below a media root directory.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rejects keys that would escape the media root.
    fn resolve(&self, key: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(key);
        let safe = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !safe || key.is_empty() {
            return Err(ApplicationError::validation(format!(
                "invalid storage key `{key}`"
            )));
        }
        Ok(self.root.join(relative))
    }
}

/// Lowercased alphanumeric extension of the original file name, if any.
fn extension_of(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    let ext = ext.to_ascii_lowercase();
    (!ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .then_some(ext)
}

fn storage_key(upload: &FileUpload) -> String {
    let digest = blake3::hash(&upload.bytes).to_hex();
    let stem = format!("{}-{}", Uuid::new_v4().simple(), &digest.as_str()[..12]);
    match extension_of(&upload.file_name) {
        Some(ext) => format!("{UPLOAD_PREFIX}/{stem}.{ext}"),
        None => format!("{UPLOAD_PREFIX}/{stem}"),
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(&self, upload: &FileUpload) -> ApplicationResult<StoredFile> {
        let key = storage_key(upload);
        let path = self.resolve(&key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        }
        fs::write(&path, &upload.bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        tracing::debug!(key = %key, size = upload.size(), "stored upload");

        Ok(StoredFile {
            key,
            original_name: upload.file_name.clone(),
            content_type: upload.content_type.clone(),
            size: upload.size(),
        })
    }

    async fn remove(&self, key: &str) -> ApplicationResult<()> {
        let path = self.resolve(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn upload(name: &str, body: &'static [u8]) -> FileUpload {
        FileUpload {
            file_name: name.into(),
            content_type: Some("application/pdf".into()),
            bytes: Bytes::from_static(body),
        }
    }

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("folio-storage-{}", Uuid::new_v4().simple()))
    }

    #[test]
    fn extensions_are_normalized_or_dropped() {
        assert_eq!(extension_of("Report.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("no_extension"), None);
        assert_eq!(extension_of("weird.p$f"), None);
    }

    #[test]
    fn keys_outside_the_root_are_rejected() {
        let storage = LocalFileStorage::new("/tmp/media");
        assert!(storage.resolve("../etc/passwd").is_err());
        assert!(storage.resolve("/etc/passwd").is_err());
        assert!(storage.resolve("uploads/a.pdf").is_ok());
    }

    #[tokio::test]
    async fn store_then_remove_round_trip() {
        let root = temp_root();
        let storage = LocalFileStorage::new(&root);

        let stored = storage.store(&upload("guide.pdf", b"%PDF-1.7")).await.unwrap();
        assert!(stored.key.starts_with("uploads/"));
        assert!(stored.key.ends_with(".pdf"));
        assert_eq!(stored.size, 8);
        assert_eq!(stored.original_name, "guide.pdf");
        assert!(root.join(&stored.key).exists());

        storage.remove(&stored.key).await.unwrap();
        assert!(!root.join(&stored.key).exists());
        // second removal is a no-op
        storage.remove(&stored.key).await.unwrap();

        let _ = std::fs::remove_dir_all(root);
    }
}
