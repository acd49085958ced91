use std::sync::Arc;

use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult, FormErrors},
    },
    domain::category::{
        CategoryId, CategoryName, CategoryRepository, CategorySlug, CategorySlugService,
        NewCategory,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    /// Normalized before use; a unique slug is derived from the name when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slug_service: Arc<CategorySlugService>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slug_service: Arc<CategorySlugService>) -> Self {
        Self { repo, slug_service }
    }

    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "manage")?;

        let mut errors = FormErrors::new();
        let Some(name) = errors.check("name", CategoryName::new(command.name)) else {
            return Err(ApplicationError::Form(errors));
        };

        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "category {name} already exists"
            )));
        }

        let slug = match command.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(requested) => {
                let slug = CategorySlug::new(self.slug_service.normalize(requested))
                    .map_err(|err| ApplicationError::field("slug", err.detail()))?;
                if self.repo.find_by_slug(&slug).await?.is_some() {
                    return Err(ApplicationError::conflict(format!(
                        "category slug {slug} is already in use"
                    )));
                }
                slug
            }
            None => self.slug_service.generate_unique_slug(&name).await?,
        };

        let category = self
            .repo
            .insert(NewCategory {
                name,
                slug,
                description: command.description.unwrap_or_default().trim().to_string(),
            })
            .await?;

        tracing::info!(category_id = category.id.0, slug = %category.slug, "category created");
        Ok(category.into())
    }

    /// Content linked to the category keeps existing without it.
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "manage")?;
        let id = CategoryId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(category_id = id.0, "category deleted");
        Ok(())
    }
}
