use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by name.
    async fn list_all(&self) -> DomainResult<Vec<Category>>;

    /// Categories among `ids` that exist; missing ids are skipped.
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;

    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;

    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}
