use super::UserQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, Page, ProfileDto, users::sorted_capabilities},
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentFilter, PageRequest},
};

pub const PROFILE_PAGE_SIZE: u32 = 20;

impl UserQueryService {
    pub async fn profile(
        &self,
        actor: &AuthenticatedUser,
        page: Option<u32>,
    ) -> ApplicationResult<ProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let page = PageRequest::new(page, PROFILE_PAGE_SIZE);
        let (items, total) = self
            .content_repo
            .list_page(&ContentFilter::by_author(actor.id), page)
            .await?;

        Ok(ProfileDto {
            capabilities: sorted_capabilities(user.capabilities()),
            user: user.into(),
            contents: Page::new(items, page, total).map(Into::into),
        })
    }
}
