// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod role;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::{RoleRepository, UserRepository};
pub use role::{BuiltinRole, NewRole, Role, RoleId, RoleName};
pub use value_objects::{Capability, PasswordHash, UserId, Username};
