use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult, FormErrors},
    },
    domain::user::{BuiltinRole, NewUser, PasswordHash, RoleId, RoleName, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// The first account becomes `Admin`; later ones get `Viewer` when
    /// that role exists.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let mut errors = FormErrors::new();
        let Some(username) = errors.check("username", Username::new(command.username)) else {
            return Err(ApplicationError::Form(errors));
        };
        validate_password(&command.password)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let existing = self.user_repo.count().await?;
        let role_id = self.initial_role(existing).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(username, password_hash, role_id, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = %user.id, role = ?user.role_name(), "user registered");
        Ok(user.into())
    }

    async fn initial_role(&self, existing: u64) -> ApplicationResult<Option<RoleId>> {
        if existing == 0 {
            let (role, _) = self
                .role_repo
                .get_or_create(BuiltinRole::Admin.as_new_role())
                .await?;
            return Ok(Some(role.id));
        }

        let viewer = RoleName::new(BuiltinRole::Viewer.name())?;
        Ok(self
            .role_repo
            .find_by_name(&viewer)
            .await?
            .map(|role| role.id))
    }
}
