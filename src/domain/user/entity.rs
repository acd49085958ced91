// src/domain/user/entity.rs
use crate::domain::user::role::{Role, RoleId};
use crate::domain::user::value_objects::{Capability, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role: Option<Role>,
    pub bio: String,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn capabilities(&self) -> HashSet<Capability> {
        self.role
            .as_ref()
            .map(Role::capabilities)
            .unwrap_or_default()
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role.as_ref().map(|role| role.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub role_id: Option<RoleId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: Username,
        password_hash: PasswordHash,
        role_id: Option<RoleId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            password_hash,
            role_id,
            is_active: true,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub bio: Option<String>,
    pub avatar: Option<Option<String>>,
    pub role_id: Option<Option<RoleId>>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            bio: None,
            avatar: None,
            role_id: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn with_role(mut self, role_id: Option<RoleId>) -> Self {
        self.role_id = Some(role_id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bio.is_none() && self.avatar.is_none() && self.role_id.is_none()
    }
}
