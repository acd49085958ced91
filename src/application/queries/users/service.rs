use std::sync::Arc;

use crate::domain::{
    content::ContentReadRepository,
    user::{RoleRepository, UserRepository},
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) role_repo: Arc<dyn RoleRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        role_repo: Arc<dyn RoleRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            content_repo,
        }
    }
}
