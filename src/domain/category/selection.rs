use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};

const MISSING_CATEGORY: &str = "select a category or create a new one";

/// Categories as submitted with a content form: existing ids plus an
/// optional free-text name for a category to get-or-create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    existing: Vec<CategoryId>,
    new_name: Option<CategoryName>,
}

impl CategorySelection {
    pub fn new(existing: Vec<i64>, new_name: Option<String>) -> DomainResult<Self> {
        let mut ids = Vec::with_capacity(existing.len());
        for raw in existing {
            let id = CategoryId::new(raw)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        let new_name = new_name
            .filter(|name| !name.trim().is_empty())
            .map(CategoryName::new)
            .transpose()?;

        Ok(Self {
            existing: ids,
            new_name,
        })
    }

    pub fn existing(&self) -> &[CategoryId] {
        &self.existing
    }

    pub fn new_name(&self) -> Option<&CategoryName> {
        self.new_name.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.existing.is_empty() && self.new_name.is_none()
    }

    /// New content must end up with at least one category.
    pub fn require_for_create(self) -> DomainResult<Self> {
        if self.is_empty() {
            return Err(DomainError::Validation(MISSING_CATEGORY.into()));
        }
        Ok(self)
    }

    /// On edit an empty submission keeps the current categories
    /// (`Ok(None)`), unless there are none to keep.
    pub fn resolve_for_edit(self, current: &[Category]) -> DomainResult<Option<Self>> {
        if !self.is_empty() {
            return Ok(Some(self));
        }
        if current.is_empty() {
            return Err(DomainError::Validation(MISSING_CATEGORY.into()));
        }
        Ok(None)
    }
}

/// Resolved categories ready to persist together with the content row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAssignment {
    pub existing: Vec<CategoryId>,
    pub create: Option<NewCategory>,
}

impl CategoryAssignment {
    pub fn existing_only(existing: Vec<CategoryId>) -> Self {
        Self {
            existing,
            create: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::value_objects::CategorySlug;

    fn news() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: CategoryName::new("News").unwrap(),
            slug: CategorySlug::new("news").unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn blank_new_name_counts_as_absent() {
        let selection = CategorySelection::new(vec![], Some("   ".into())).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn duplicate_ids_are_collapsed() {
        let selection = CategorySelection::new(vec![3, 3, 1], None).unwrap();
        assert_eq!(selection.existing().len(), 2);
    }

    #[test]
    fn create_requires_some_category() {
        let err = CategorySelection::default().require_for_create().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_accepts_new_name_only() {
        let selection = CategorySelection::new(vec![], Some("Tech".into()))
            .unwrap()
            .require_for_create()
            .unwrap();
        assert_eq!(selection.new_name().map(CategoryName::as_str), Some("Tech"));
    }

    #[test]
    fn edit_with_nothing_submitted_keeps_current_categories() {
        let outcome = CategorySelection::default()
            .resolve_for_edit(&[news()])
            .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn edit_with_nothing_to_keep_is_rejected() {
        assert!(CategorySelection::default().resolve_for_edit(&[]).is_err());
    }

    #[test]
    fn edit_with_submission_replaces_categories() {
        let outcome = CategorySelection::new(vec![2], None)
            .unwrap()
            .resolve_for_edit(&[news()])
            .unwrap();
        assert_eq!(outcome.unwrap().existing(), &[CategoryId(2)]);
    }
}
