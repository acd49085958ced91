//! Page contexts returned by the page endpoints.
use crate::domain::content::AuthorStats;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    CapabilityView, CategoryDto, CommentDto, ContentDto, ContentSummaryDto, DocumentDto, Page,
    UserDto,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomePageDto {
    pub latest: Vec<ContentSummaryDto>,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentListPageDto {
    pub contents: Page<ContentSummaryDto>,
    pub query: Option<String>,
    pub category: Option<CategoryDto>,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDetailDto {
    pub content: ContentDto,
    /// Approved comments, oldest first.
    pub comments: Vec<CommentDto>,
    pub documents: Vec<DocumentDto>,
    pub can_edit: bool,
    pub can_comment: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryChoice {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

/// What a client needs to render the create or edit form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentFormSchema {
    pub categories: Vec<CategoryChoice>,
    pub title_max_length: usize,
    pub body_min_length: usize,
    pub max_upload_bytes: u64,
    pub can_publish: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditContentFormDto {
    pub content: ContentDto,
    pub form: ContentFormSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmationDto {
    pub content: ContentSummaryDto,
    pub comment_count: u64,
    pub document_count: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AuthorStatsDto {
    pub total: u64,
    pub published: u64,
    pub scheduled: u64,
    pub drafts: u64,
    pub total_views: i64,
}

impl From<AuthorStats> for AuthorStatsDto {
    fn from(stats: AuthorStats) -> Self {
        Self {
            total: stats.total,
            published: stats.published,
            scheduled: stats.scheduled,
            drafts: stats.drafts,
            total_views: stats.total_views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub stats: AuthorStatsDto,
    pub contents: Page<ContentSummaryDto>,
    /// Unapproved comments on the user's own content.
    pub pending_comments: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub user: UserDto,
    pub capabilities: Vec<CapabilityView>,
    pub contents: Page<ContentSummaryDto>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct BulkResultDto {
    pub requested: u64,
    pub updated: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RoleSeedReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
}
