use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        category::CategoryRepository,
        comment::CommentRepository,
        content::{Content, ContentReadRepository, ContentSlug},
        document::{DocumentRepository, UploadLimit},
    },
};

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) document_repo: Arc<dyn DocumentRepository>,
    pub(super) upload_limit: UploadLimit,
}

impl ContentQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        document_repo: Arc<dyn DocumentRepository>,
        upload_limit: UploadLimit,
    ) -> Self {
        Self {
            read_repo,
            category_repo,
            comment_repo,
            document_repo,
            upload_limit,
        }
    }

    pub(super) async fn load_by_slug(&self, slug: &str) -> ApplicationResult<Content> {
        let slug = ContentSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))
    }
}
