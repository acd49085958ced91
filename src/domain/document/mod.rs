pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Document, DocumentDraft};
pub use repository::DocumentRepository;
pub use value_objects::{DocumentId, DocumentTitle, StoredFile, UploadLimit};
