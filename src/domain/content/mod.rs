pub mod entity;
pub mod listing;
pub mod publication;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Content, ContentUpdate, NewContent};
pub use listing::{AuthorStats, ContentFilter, PageRequest};
pub use publication::Publication;
pub use repository::{ContentReadRepository, ContentWriteRepository, RemovedContent};
pub use services::ContentSlugService;
pub use specifications::{CanViewContentSpec, IsContentAuthorSpec};
pub use value_objects::{ContentBody, ContentId, ContentSlug, ContentTitle};
