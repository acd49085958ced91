use crate::domain::content::ContentId;
use crate::domain::document::entity::Document;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn list_by_content(&self, content_id: ContentId) -> DomainResult<Vec<Document>>;
}
