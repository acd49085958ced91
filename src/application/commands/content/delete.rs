// src/application/commands/content/delete.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentSlug, IsContentAuthorSpec},
};

pub struct DeleteContentCommand {
    pub slug: String,
}

impl ContentCommandService {
    /// Deletes the content with its comments and documents, then removes
    /// the files they referenced.
    pub async fn delete_content(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteContentCommand,
    ) -> ApplicationResult<()> {
        let slug = ContentSlug::new(command.slug)?;
        let content = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        if !IsContentAuthorSpec::new(&content, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author can delete this content",
            ));
        }

        let removed = self.write_repo.delete(content.id).await?;
        let mut keys = removed.file_keys;
        keys.extend(content.featured_image);
        self.discard_files(&keys).await;

        tracing::info!(content_id = content.id.0, slug = %content.slug, "content deleted");
        Ok(())
    }
}
