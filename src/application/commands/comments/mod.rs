mod add;
mod moderate;
mod service;

pub use add::AddCommentCommand;
pub use moderate::ModerateCommentsCommand;
pub use service::CommentCommandService;
