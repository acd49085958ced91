use super::ContentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, DashboardDto, Page},
        error::ApplicationResult,
    },
    domain::content::{ContentFilter, PageRequest},
};

pub const DASHBOARD_PAGE_SIZE: u32 = 10;

impl ContentQueryService {
    pub async fn dashboard(
        &self,
        actor: &AuthenticatedUser,
        page: Option<u32>,
    ) -> ApplicationResult<DashboardDto> {
        let stats = self.read_repo.stats_for_author(actor.id).await?;
        let page = PageRequest::new(page, DASHBOARD_PAGE_SIZE);
        let (items, total) = self
            .read_repo
            .list_page(&ContentFilter::by_author(actor.id), page)
            .await?;
        let pending_comments = self.comment_repo.count_pending_for_author(actor.id).await?;

        Ok(DashboardDto {
            stats: stats.into(),
            contents: Page::new(items, page, total).map(Into::into),
            pending_comments,
        })
    }
}
