// src/application/commands/content/publish.rs
use super::ContentCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, BulkResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::ContentId,
};

pub struct SetPublicationCommand {
    pub ids: Vec<i64>,
    pub publish: bool,
}

impl ContentCommandService {
    /// Bulk publish or unpublish. Publishing keeps any stored
    /// `published_at`; unknown ids are skipped.
    pub async fn set_publication(
        &self,
        actor: &AuthenticatedUser,
        command: SetPublicationCommand,
    ) -> ApplicationResult<BulkResultDto> {
        ensure_capability(actor, "content", "publish")?;

        let mut ids = command
            .ids
            .into_iter()
            .map(ContentId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Err(ApplicationError::validation("no content ids given"));
        }

        let now = self.clock.now();
        let updated = self
            .write_repo
            .set_publication_bulk(&ids, command.publish, now)
            .await?;

        tracing::info!(
            requested = ids.len(),
            updated,
            publish = command.publish,
            actor_id = %actor.id,
            "bulk publication change"
        );
        Ok(BulkResultDto {
            requested: ids.len() as u64,
            updated,
        })
    }

    /// Promotes scheduled content whose time has passed. Safe to re-run.
    pub async fn publish_due(&self) -> ApplicationResult<u64> {
        let now = self.clock.now();
        let published = self.write_repo.publish_due(now).await?;
        tracing::info!(published, "published scheduled content");
        Ok(published)
    }
}
