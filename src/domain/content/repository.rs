use crate::domain::content::entity::{Content, ContentUpdate, NewContent};
use crate::domain::content::listing::{AuthorStats, ContentFilter, PageRequest};
use crate::domain::content::value_objects::{ContentId, ContentSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage keys released by a delete; the caller removes the files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovedContent {
    pub file_keys: Vec<String>,
}

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    /// Inserts the row, creates the pending category, links categories
    /// and attaches the document atomically.
    async fn create(&self, content: NewContent) -> DomainResult<Content>;

    /// Fails with `Conflict` when the row changed since
    /// `original_updated_at`.
    async fn update(&self, update: ContentUpdate) -> DomainResult<Content>;

    /// Deletes the row with its comments, documents and category links.
    async fn delete(&self, id: ContentId) -> DomainResult<RemovedContent>;

    /// Publishes or unpublishes every listed item. Publishing keeps an
    /// existing `published_at`. Returns the number of rows touched.
    async fn set_publication_bulk(
        &self,
        ids: &[ContentId],
        publish: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Flips scheduled items whose `published_at` has passed and stamps
    /// their `updated_at` with `now`.
    async fn publish_due(&self, now: DateTime<Utc>) -> DomainResult<u64>;

    /// Does not touch `updated_at`.
    async fn increment_view_count(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<Content>>;

    async fn find_by_slug(&self, slug: &ContentSlug) -> DomainResult<Option<Content>>;

    /// Returns the requested page and the total number of matches.
    async fn list_page(
        &self,
        filter: &ContentFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Content>, u64)>;

    async fn stats_for_author(&self, author: UserId) -> DomainResult<AuthorStats>;
}
