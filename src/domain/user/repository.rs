use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User, UserUpdate},
    role::{NewRole, Role, RoleId, RoleName},
    value_objects::{UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
}

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Role>>;

    async fn find_by_id(&self, id: RoleId) -> DomainResult<Option<Role>>;

    async fn find_by_name(&self, name: &RoleName) -> DomainResult<Option<Role>>;

    /// Returns the role and whether it was created by this call.
    async fn get_or_create(&self, role: NewRole) -> DomainResult<(Role, bool)>;

    /// Users holding the role keep their account with no role.
    async fn delete(&self, id: RoleId) -> DomainResult<()>;
}
