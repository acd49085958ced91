use crate::domain::user::{Capability, Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub role: Option<String>,
    pub bio: String,
    pub avatar: Option<String>,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.to_string(),
            role: user.role.map(|role| role.name.to_string()),
            bio: user.bio,
            avatar: user.avatar,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct CapabilityView {
    pub resource: String,
    pub action: String,
}

impl From<Capability> for CapabilityView {
    fn from(value: Capability) -> Self {
        Self {
            resource: value.resource,
            action: value.action,
        }
    }
}

pub(crate) fn sorted_capabilities(
    capabilities: impl IntoIterator<Item = Capability>,
) -> Vec<CapabilityView> {
    let mut views: Vec<CapabilityView> = capabilities.into_iter().map(Into::into).collect();
    views.sort();
    views
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub capabilities: Vec<CapabilityView>,
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        let capabilities = sorted_capabilities(role.capabilities());
        Self {
            id: role.id.into(),
            name: role.name.to_string(),
            description: role.description,
            capabilities,
        }
    }
}
