use super::UserQueryService;
use crate::application::{
    capability::ensure_capability,
    dto::{AuthenticatedUser, RoleDto},
    error::ApplicationResult,
};

impl UserQueryService {
    pub async fn list_roles(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<RoleDto>> {
        ensure_capability(actor, "users", "manage")?;
        let roles = self.role_repo.list().await?;
        Ok(roles.into_iter().map(Into::into).collect())
    }
}
