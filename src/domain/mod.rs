pub mod category;
pub mod comment;
pub mod content;
pub mod document;
pub mod errors;
pub mod slug;
pub mod user;
