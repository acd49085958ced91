use super::UserCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, RoleSeedReport, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{BuiltinRole, RoleId, UserId, UserUpdate},
};

pub struct AssignRoleCommand {
    pub user_id: i64,
    /// `None` clears the role.
    pub role_id: Option<i64>,
}

impl UserCommandService {
    pub async fn assign_role(
        &self,
        actor: &AuthenticatedUser,
        command: AssignRoleCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "manage")?;

        let user_id = UserId::new(command.user_id)?;
        let role_id = match command.role_id {
            Some(raw) => {
                let id = RoleId::new(raw)?;
                self.role_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("role not found"))?;
                Some(id)
            }
            None => None,
        };

        let user = self
            .user_repo
            .update(UserUpdate::new(user_id).with_role(role_id))
            .await?;
        tracing::info!(user_id = %user.id, role = ?user.role_name(), "role assigned");
        Ok(user.into())
    }

    /// Users holding the role are left without one.
    pub async fn delete_role(&self, actor: &AuthenticatedUser, id: i64) -> ApplicationResult<()> {
        ensure_capability(actor, "users", "manage")?;
        let id = RoleId::new(id)?;
        self.role_repo.delete(id).await?;
        tracing::info!(role_id = id.0, "role deleted");
        Ok(())
    }

    /// Get-or-creates the built-in roles. Idempotent.
    pub async fn ensure_builtin_roles(&self) -> ApplicationResult<RoleSeedReport> {
        let mut report = RoleSeedReport::default();
        for builtin in BuiltinRole::ALL {
            let (role, created) = self.role_repo.get_or_create(builtin.as_new_role()).await?;
            if created {
                report.created.push(role.name.to_string());
            } else {
                report.existing.push(role.name.to_string());
            }
        }
        Ok(report)
    }
}
