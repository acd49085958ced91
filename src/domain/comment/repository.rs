use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::content::ContentId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    /// Oldest first.
    async fn list_for_content(
        &self,
        content_id: ContentId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>>;

    /// Unapproved comments across all content, oldest first.
    async fn list_pending(&self) -> DomainResult<Vec<Comment>>;

    /// Sets `is_approved` on every listed comment; returns rows touched.
    async fn set_approval(
        &self,
        ids: &[CommentId],
        approved: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64>;

    /// Unapproved comments left on content written by `author`.
    async fn count_pending_for_author(&self, author: UserId) -> DomainResult<u64>;
}
