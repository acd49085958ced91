use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::{ApplicationError, ApplicationResult, FormErrors},
    },
    domain::{
        comment::{CommentBody, NewComment},
        content::{CanViewContentSpec, ContentSlug},
    },
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    /// Any signed-in user may comment on content they can see.
    pub async fn add_comment(
        &self,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let slug = ContentSlug::new(command.slug)?;
        let content = self
            .content_repo
            .find_by_slug(&slug)
            .await?
            .filter(|content| {
                CanViewContentSpec::new(&actor.capabilities, content, Some(actor.id))
                    .is_satisfied()
            })
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        let mut errors = FormErrors::new();
        let Some(body) = errors.check("body", CommentBody::new(command.body)) else {
            return Err(ApplicationError::Form(errors));
        };

        let comment = NewComment::new(
            content.id,
            actor.id,
            body,
            self.requires_moderation,
            self.clock.now(),
        );
        let created = self.comment_repo.insert(comment).await?;

        tracing::info!(
            comment_id = created.id.0,
            content_id = content.id.0,
            approved = created.is_approved,
            "comment submitted"
        );
        Ok(created.into())
    }
}
