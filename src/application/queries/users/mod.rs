mod profile;
mod roles;
mod service;

pub use profile::PROFILE_PAGE_SIZE;
pub use service::UserQueryService;
