mod login;
mod password;
mod register;
mod role;
mod service;
mod update;

pub use login::{LoginResult, LoginUserCommand};
pub use register::RegisterUserCommand;
pub use role::AssignRoleCommand;
pub use service::UserCommandService;
pub use update::UpdateProfileCommand;
