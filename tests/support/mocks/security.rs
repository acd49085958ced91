// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use folio_cms::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use folio_cms::domain::user::{BuiltinRole, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

use super::store::{ADMIN_ID, AUTHOR_ID, OTHER_AUTHOR_ID, VIEWER_ID};
use super::time::fixed_now;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const VIEWER_TOKEN: &str = "viewer-token";
pub const OTHER_AUTHOR_TOKEN: &str = "other-author-token";

fn user(id: i64, username: &str, role: BuiltinRole) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId(id),
        username: username.into(),
        role: Some(role.name().to_string()),
        capabilities: role.capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// The seeded users behind the fixed test tokens.
pub fn test_user(token: &str) -> Option<AuthenticatedUser> {
    match token {
        ADMIN_TOKEN => Some(user(ADMIN_ID, "admin", BuiltinRole::Admin)),
        AUTHOR_TOKEN => Some(user(AUTHOR_ID, "author", BuiltinRole::Author)),
        VIEWER_TOKEN => Some(user(VIEWER_ID, "viewer", BuiltinRole::Viewer)),
        OTHER_AUTHOR_TOKEN => Some(user(OTHER_AUTHOR_ID, "other", BuiltinRole::Author)),
        _ => None,
    }
}

/// Accepts the fixed tokens plus anything it issued itself.
#[derive(Default)]
pub struct DummyTokenManager {
    issued: Mutex<HashMap<String, AuthenticatedUser>>,
}

impl DummyTokenManager {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        let token = format!("issued-{}", subject.user_id);
        let user = AuthenticatedUser {
            id: subject.user_id,
            username: subject.username,
            role: subject.role,
            capabilities: subject.capabilities,
            issued_at: now,
            expires_at: now + Duration::hours(1),
        };
        self.issued.lock().unwrap().insert(token.clone(), user);
        Ok(AuthTokenDto {
            token,
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        if let Some(user) = test_user(token) {
            return Ok(user);
        }
        self.issued
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

/// Prefixes instead of hashing so verification stays exact and fast.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
