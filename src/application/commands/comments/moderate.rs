use super::CommentCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, BulkResultDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct ModerateCommentsCommand {
    pub ids: Vec<i64>,
    pub approve: bool,
}

impl CommentCommandService {
    pub async fn moderate(
        &self,
        actor: &AuthenticatedUser,
        command: ModerateCommentsCommand,
    ) -> ApplicationResult<BulkResultDto> {
        ensure_capability(actor, "comments", "moderate")?;

        let mut ids = command
            .ids
            .into_iter()
            .map(CommentId::new)
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Err(ApplicationError::validation("no comment ids given"));
        }

        let updated = self
            .comment_repo
            .set_approval(&ids, command.approve, self.clock.now())
            .await?;

        tracing::info!(
            requested = ids.len(),
            updated,
            approve = command.approve,
            moderator_id = %actor.id,
            "comments moderated"
        );
        Ok(BulkResultDto {
            requested: ids.len() as u64,
            updated,
        })
    }
}
