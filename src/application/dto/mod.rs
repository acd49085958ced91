pub mod auth;
pub mod comments;
pub mod content;
pub mod documents;
pub mod pages;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use content::{CategoryDto, ContentDto, ContentSummaryDto, truncate_chars};
pub use documents::DocumentDto;
pub use pages::{
    AuthorStatsDto, BulkResultDto, CategoryChoice, ContentDetailDto, ContentFormSchema,
    ContentListPageDto, DashboardDto, DeleteConfirmationDto, EditContentFormDto, HomePageDto,
    ProfileDto, RoleSeedReport,
};
pub use pagination::Page;
pub use users::{CapabilityView, RoleDto, UserDto};
