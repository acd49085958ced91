use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::Capability;
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleId(pub i64);

impl RoleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("role id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RoleId> for i64 {
    fn from(value: RoleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("role name cannot be empty".into()));
        }
        if value.chars().count() > 50 {
            return Err(DomainError::Validation(
                "role name must be at most 50 characters long".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: RoleName,
    pub description: String,
}

impl Role {
    /// Capabilities granted by this role. Roles that are not one of the
    /// built-in names grant nothing.
    pub fn capabilities(&self) -> HashSet<Capability> {
        BuiltinRole::from_name(self.name.as_str())
            .map(|builtin| builtin.capabilities())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct NewRole {
    pub name: RoleName,
    pub description: String,
}

/// The roles seeded by `create-roles`, matched by name case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRole {
    Admin,
    Editor,
    Author,
    Viewer,
}

impl BuiltinRole {
    pub const ALL: [BuiltinRole; 4] = [
        BuiltinRole::Admin,
        BuiltinRole::Editor,
        BuiltinRole::Author,
        BuiltinRole::Viewer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinRole::Admin => "Admin",
            BuiltinRole::Editor => "Editor",
            BuiltinRole::Author => "Author",
            BuiltinRole::Viewer => "Viewer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuiltinRole::Admin => "Full access, including user and role management",
            BuiltinRole::Editor => "Publishes content, moderates comments and manages categories",
            BuiltinRole::Author => "Writes and publishes own content",
            BuiltinRole::Viewer => "Reads content and leaves comments",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            BuiltinRole::Admin => HashSet::from([
                Cap::new("content", "create"),
                Cap::new("content", "publish"),
                Cap::new("content", "view_drafts"),
                Cap::new("comments", "moderate"),
                Cap::new("categories", "manage"),
                Cap::new("users", "manage"),
            ]),
            BuiltinRole::Editor => HashSet::from([
                Cap::new("content", "create"),
                Cap::new("content", "publish"),
                Cap::new("content", "view_drafts"),
                Cap::new("comments", "moderate"),
                Cap::new("categories", "manage"),
            ]),
            BuiltinRole::Author => HashSet::from([
                Cap::new("content", "create"),
                Cap::new("content", "publish"),
            ]),
            BuiltinRole::Viewer => HashSet::new(),
        }
    }

    pub fn as_new_role(&self) -> NewRole {
        NewRole {
            name: RoleName(self.name().to_string()),
            description: self.description().to_string(),
        }
    }
}

impl fmt::Display for BuiltinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        Role {
            id: RoleId::new(1).unwrap(),
            name: RoleName::new(name).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn builtin_roles_match_case_insensitively() {
        assert_eq!(BuiltinRole::from_name("editor"), Some(BuiltinRole::Editor));
        assert_eq!(BuiltinRole::from_name(" ADMIN "), Some(BuiltinRole::Admin));
        assert_eq!(BuiltinRole::from_name("publisher"), None);
    }

    #[test]
    fn author_can_add_content_but_not_moderate() {
        let caps = role("Author").capabilities();
        assert!(caps.iter().any(|c| c.matches("content", "create")));
        assert!(!caps.iter().any(|c| c.matches("comments", "moderate")));
    }

    #[test]
    fn unknown_role_grants_nothing() {
        assert!(role("Guest").capabilities().is_empty());
        assert!(BuiltinRole::Viewer.capabilities().is_empty());
    }
}
