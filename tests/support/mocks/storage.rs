// tests/support/mocks/storage.rs
use async_trait::async_trait;
use bytes::Bytes;
use folio_cms::application::{
    ApplicationResult,
    ports::storage::{FileStorage, FileUpload},
};
use folio_cms::domain::document::StoredFile;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Keeps stored files in a map so tests can see what is left behind.
#[derive(Default)]
pub struct MemoryStorage {
    files: Mutex<BTreeMap<String, Bytes>>,
    counter: Mutex<u64>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.files.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl FileStorage for MemoryStorage {
    async fn store(&self, upload: &FileUpload) -> ApplicationResult<StoredFile> {
        let n = {
            let mut counter = self.counter.lock().unwrap();
            *counter += 1;
            *counter
        };
        let key = format!("uploads/{n}-{}", upload.file_name);
        self.files
            .lock()
            .unwrap()
            .insert(key.clone(), upload.bytes.clone());
        Ok(StoredFile {
            key,
            original_name: upload.file_name.clone(),
            content_type: upload.content_type.clone(),
            size: upload.size(),
        })
    }

    async fn remove(&self, key: &str) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(key);
        Ok(())
    }
}
