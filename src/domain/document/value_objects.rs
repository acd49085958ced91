use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub i64);

impl DocumentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "document id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<DocumentId> for i64 {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitle(String);

impl DocumentTitle {
    pub const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "a title is required when uploading a document".into(),
            ));
        }
        if value.chars().count() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "document title must be at most {} characters long",
                Self::MAX_LEN
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file already written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub key: String,
    pub original_name: String,
    pub content_type: Option<String>,
    pub size: u64,
}

/// Per-file ceiling applied to every upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimit(u64);

impl UploadLimit {
    pub const DEFAULT_BYTES: u64 = 5 * 1024 * 1024;

    pub fn new(max_bytes: u64) -> Self {
        Self(max_bytes)
    }

    pub fn max_bytes(&self) -> u64 {
        self.0
    }

    pub fn check(&self, size: u64) -> DomainResult<()> {
        if size == 0 {
            return Err(DomainError::Validation("the submitted file is empty".into()));
        }
        if size > self.0 {
            return Err(DomainError::Validation(format!(
                "file size must not exceed {} bytes",
                self.0
            )));
        }
        Ok(())
    }
}

impl Default for UploadLimit {
    fn default() -> Self {
        Self(Self::DEFAULT_BYTES)
    }
}
