use crate::domain::category::CategorySlug;
use crate::domain::user::UserId;

/// Criteria for content listings. Results are ordered newest
/// publication first, then newest creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub published_only: bool,
    /// Case-insensitive substring matched against title and body.
    pub search: Option<String>,
    pub category: Option<CategorySlug>,
    pub author: Option<UserId>,
}

impl ContentFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }

    pub fn by_author(author: UserId) -> Self {
        Self {
            author: Some(author),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        self
    }

    pub fn with_category(mut self, category: Option<CategorySlug>) -> Self {
        self.category = category;
        self
    }
}

/// One-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn first(per_page: u32) -> Self {
        Self::new(None, per_page)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorStats {
    pub total: u64,
    pub published: u64,
    pub scheduled: u64,
    pub drafts: u64,
    pub total_views: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_is_treated_as_first_page() {
        let page = PageRequest::new(Some(0), 9);
        assert_eq!(page.page, 1);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(Some(3), 9).offset(), 18);
    }

    #[test]
    fn blank_search_is_dropped() {
        let filter = ContentFilter::published().with_search(Some("   ".into()));
        assert!(filter.search.is_none());
    }
}
