pub mod entity;
pub mod repository;
pub mod selection;
pub mod services;
pub mod value_objects;

pub use entity::{Category, NewCategory};
pub use repository::CategoryRepository;
pub use selection::{CategoryAssignment, CategorySelection};
pub use services::CategorySlugService;
pub use value_objects::{CategoryId, CategoryName, CategorySlug};
