use super::ContentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::{CategoryAssignment, CategorySelection, NewCategory},
};

impl ContentCommandService {
    /// Turns a validated selection into ids to link plus, when the typed
    /// name does not exist yet, a category to create in the same
    /// transaction as the content.
    pub(super) async fn resolve_categories(
        &self,
        selection: CategorySelection,
    ) -> ApplicationResult<CategoryAssignment> {
        let mut existing = selection.existing().to_vec();

        if !existing.is_empty() {
            let found = self.category_repo.find_by_ids(&existing).await?;
            if let Some(missing) = existing
                .iter()
                .find(|id| !found.iter().any(|category| category.id == **id))
            {
                return Err(ApplicationError::not_found(format!(
                    "category {} not found",
                    missing.0
                )));
            }
        }

        let Some(name) = selection.new_name() else {
            return Ok(CategoryAssignment::existing_only(existing));
        };

        if let Some(category) = self.category_repo.find_by_name(name).await? {
            if !existing.contains(&category.id) {
                existing.push(category.id);
            }
            return Ok(CategoryAssignment::existing_only(existing));
        }

        let slug = self.category_slug_service.generate_unique_slug(name).await?;
        Ok(CategoryAssignment {
            existing,
            create: Some(NewCategory {
                name: name.clone(),
                slug,
                description: String::new(),
            }),
        })
    }
}
