use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::content::repository::ContentReadRepository;
use crate::domain::content::value_objects::{ContentSlug, ContentTitle};
use crate::domain::errors::DomainResult;
use crate::domain::slug::SlugCandidates;

const FALLBACK_BASE: &str = "content";

/// Domain service responsible for producing unique slugs for content.
pub struct ContentSlugService {
    read_repo: Arc<dyn ContentReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ContentSlugService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(&self, title: &ContentTitle) -> DomainResult<ContentSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            FALLBACK_BASE.to_string()
        } else {
            base
        };

        let mut candidates = SlugCandidates::bounded(base, ContentSlug::MAX_LEN);
        loop {
            let slug = ContentSlug::new(candidates.next_candidate())?;
            if self.read_repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }
    }
}
