// src/infrastructure/repositories/postgres_document.rs
use super::map_sqlx;
use crate::domain::content::ContentId;
use crate::domain::document::{Document, DocumentId, DocumentRepository, DocumentTitle, StoredFile};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    title: String,
    content_id: Option<i64>,
    file_key: String,
    file_name: String,
    file_content_type: Option<String>,
    file_size: i64,
    uploaded_by: i64,
    uploaded_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        Ok(Document {
            id: DocumentId::new(row.id)?,
            title: DocumentTitle::new(row.title)?,
            content_id: row.content_id.map(ContentId::new).transpose()?,
            file: StoredFile {
                key: row.file_key,
                original_name: row.file_name,
                content_type: row.file_content_type,
                size: u64::try_from(row.file_size)
                    .map_err(|_| DomainError::Persistence("negative document size".into()))?,
            },
            uploaded_by: UserId::new(row.uploaded_by)?,
            uploaded_at: row.uploaded_at,
        })
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn list_by_content(&self, content_id: ContentId) -> DomainResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, title, content_id, file_key, file_name, file_content_type, file_size,
                    uploaded_by, uploaded_at
             FROM documents WHERE content_id = $1
             ORDER BY uploaded_at, id",
        )
        .bind(content_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Document::try_from).collect()
    }
}
