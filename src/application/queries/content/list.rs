use super::ContentQueryService;
use crate::{
    application::{
        dto::{CategoryDto, ContentListPageDto, HomePageDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategorySlug,
        content::{ContentFilter, PageRequest},
    },
};

pub const HOME_LATEST_COUNT: u32 = 5;
pub const CONTENT_PAGE_SIZE: u32 = 9;

#[derive(Debug, Clone, Default)]
pub struct ContentListQuery {
    pub q: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    pub page: Option<u32>,
}

impl ContentQueryService {
    pub async fn home(&self) -> ApplicationResult<HomePageDto> {
        let (latest, _) = self
            .read_repo
            .list_page(&ContentFilter::published(), PageRequest::first(HOME_LATEST_COUNT))
            .await?;
        let categories = self.category_repo.list_all().await?;

        Ok(HomePageDto {
            latest: latest.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        })
    }

    /// Published content, newest first, optionally narrowed by search
    /// text and category slug.
    pub async fn list(&self, query: ContentListQuery) -> ApplicationResult<ContentListPageDto> {
        let category = match query.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let slug = CategorySlug::new(raw)?;
                let category = self
                    .category_repo
                    .find_by_slug(&slug)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                Some(category)
            }
            None => None,
        };

        let filter = ContentFilter::published()
            .with_search(query.q)
            .with_category(category.as_ref().map(|c| c.slug.clone()));
        let page = PageRequest::new(query.page, CONTENT_PAGE_SIZE);
        let (items, total) = self.read_repo.list_page(&filter, page).await?;
        let categories = self.category_repo.list_all().await?;

        Ok(ContentListPageDto {
            contents: Page::new(items, page, total).map(Into::into),
            query: filter.search,
            category: category.map(CategoryDto::from),
            categories: categories.into_iter().map(Into::into).collect(),
        })
    }
}
