// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_comment;
mod postgres_content;
mod postgres_document;
mod postgres_role;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_content::{PostgresContentReadRepository, PostgresContentWriteRepository};
pub use postgres_document::PostgresDocumentRepository;
pub use postgres_role::PostgresRoleRepository;
pub use postgres_user::PostgresUserRepository;
