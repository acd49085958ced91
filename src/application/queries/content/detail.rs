use super::ContentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::CanViewContentSpec,
};
use std::collections::HashSet;

impl ContentQueryService {
    /// Unpublished content is reported as missing to readers who may not
    /// see it.
    pub async fn detail(
        &self,
        actor: Option<&AuthenticatedUser>,
        slug: &str,
    ) -> ApplicationResult<ContentDetailDto> {
        let content = self.load_by_slug(slug).await?;

        let no_capabilities = HashSet::new();
        let capabilities = actor.map_or(&no_capabilities, |actor| &actor.capabilities);
        let viewer_id = actor.map(|actor| actor.id);
        if !CanViewContentSpec::new(capabilities, &content, viewer_id).is_satisfied() {
            return Err(ApplicationError::not_found("content not found"));
        }

        let comments = self.comment_repo.list_for_content(content.id, true).await?;
        let documents = self.document_repo.list_by_content(content.id).await?;
        let can_edit = viewer_id.is_some_and(|id| content.is_authored_by(id));

        Ok(ContentDetailDto {
            content: content.into(),
            comments: comments.into_iter().map(Into::into).collect(),
            documents: documents.into_iter().map(Into::into).collect(),
            can_edit,
            can_comment: actor.is_some(),
        })
    }
}
