use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::value_objects::{CategoryName, CategorySlug};
use crate::domain::errors::DomainResult;
use crate::domain::slug::SlugCandidates;

/// Produces unused category slugs from names or admin-supplied slugs.
pub struct CategorySlugService {
    repo: Arc<dyn CategoryRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl CategorySlugService {
    pub fn new(repo: Arc<dyn CategoryRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    pub fn normalize(&self, input: &str) -> String {
        self.generator.slugify(input)
    }

    pub async fn generate_unique_slug(&self, name: &CategoryName) -> DomainResult<CategorySlug> {
        let base = self.normalize(name.as_str());
        let base = if base.is_empty() {
            "category".to_string()
        } else {
            base
        };

        let mut candidates = SlugCandidates::bounded(base, CategorySlug::MAX_LEN);
        loop {
            let slug = CategorySlug::new(candidates.next_candidate())?;
            if self.repo.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }
        }
    }
}
