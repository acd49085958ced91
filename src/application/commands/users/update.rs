use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserUpdate,
};

pub const MAX_BIO_LENGTH: usize = 1000;

pub struct UpdateProfileCommand {
    pub bio: Option<String>,
    /// An empty string clears the avatar.
    pub avatar: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id);

        if let Some(bio) = command.bio {
            let bio = bio.trim().to_string();
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(ApplicationError::field(
                    "bio",
                    format!("bio must be at most {MAX_BIO_LENGTH} characters long"),
                ));
            }
            update = update.with_bio(bio);
        }

        if let Some(avatar) = command.avatar {
            let avatar = avatar.trim().to_string();
            update = update.with_avatar((!avatar.is_empty()).then_some(avatar));
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
