use crate::domain::document::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentDto {
    pub id: i64,
    pub title: String,
    pub content_id: Option<i64>,
    pub file_key: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: u64,
    pub uploaded_by: i64,
    #[serde(with = "serde_time")]
    pub uploaded_at: DateTime<Utc>,
}

impl From<Document> for DocumentDto {
    fn from(document: Document) -> Self {
        Self {
            id: document.id.into(),
            title: document.title.to_string(),
            content_id: document.content_id.map(Into::into),
            file_key: document.file.key,
            file_name: document.file.original_name,
            content_type: document.file.content_type,
            size: document.file.size,
            uploaded_by: document.uploaded_by.into(),
            uploaded_at: document.uploaded_at,
        }
    }
}
