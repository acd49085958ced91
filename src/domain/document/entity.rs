use crate::domain::content::ContentId;
use crate::domain::document::value_objects::{DocumentId, DocumentTitle, StoredFile};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub title: DocumentTitle,
    pub content_id: Option<ContentId>,
    pub file: StoredFile,
    pub uploaded_by: UserId,
    pub uploaded_at: DateTime<Utc>,
}

/// A document uploaded alongside new content; linked once the content row exists.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    pub title: DocumentTitle,
    pub file: StoredFile,
    pub uploaded_by: UserId,
    pub uploaded_at: DateTime<Utc>,
}
