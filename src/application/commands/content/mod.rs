// src/application/commands/content/mod.rs
mod categories;
mod create;
mod delete;
mod publication;
mod publish;
mod service;
mod update;
mod uploads;
mod views;

pub use create::{CreateContentCommand, CreateContentCommandBuilder};
pub use delete::DeleteContentCommand;
pub use publication::parse_publish_at;
pub use publish::SetPublicationCommand;
pub use service::{ContentCommandService, ContentSettings};
pub use update::UpdateContentCommand;
