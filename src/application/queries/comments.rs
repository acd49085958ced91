use std::sync::Arc;

use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::CommentRepository,
};

pub struct CommentQueryService {
    repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>) -> Self {
        Self { repo }
    }

    pub async fn pending(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<CommentDto>> {
        ensure_capability(actor, "comments", "moderate")?;
        let comments = self.repo.list_pending().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
