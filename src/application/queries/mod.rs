pub mod categories;
pub mod comments;
pub mod content;
pub mod users;
