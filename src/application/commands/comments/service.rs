use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{comment::CommentRepository, content::ContentReadRepository},
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) requires_moderation: bool,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
        clock: Arc<dyn Clock>,
        requires_moderation: bool,
    ) -> Self {
        Self {
            comment_repo,
            content_repo,
            clock,
            requires_moderation,
        }
    }
}
