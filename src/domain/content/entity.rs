use crate::domain::category::{Category, CategoryAssignment};
use crate::domain::content::publication::Publication;
use crate::domain::content::value_objects::{ContentBody, ContentId, ContentSlug, ContentTitle};
use crate::domain::document::DocumentDraft;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct Content {
    pub id: ContentId,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub body: ContentBody,
    pub author_id: UserId,
    pub categories: Vec<Category>,
    pub publication: Publication,
    pub view_count: i64,
    pub featured_image: Option<String>,
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn is_published(&self) -> bool {
        self.publication.is_published()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.publication.published_at()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.publication = self.publication.publish(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.publication = self.publication.unpublish();
        self.updated_at = now;
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Everything persisted by a single create: the row, its category links
/// and an optional attached document.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub body: ContentBody,
    pub author_id: UserId,
    pub categories: CategoryAssignment,
    pub publication: Publication,
    pub featured_image: Option<String>,
    pub metadata: Map<String, Value>,
    pub document: Option<DocumentDraft>,
    pub created_at: DateTime<Utc>,
}

/// Partial update of a content row. The slug is not part of it: slugs
/// are fixed once assigned.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub title: Option<ContentTitle>,
    pub body: Option<ContentBody>,
    pub categories: Option<CategoryAssignment>,
    pub publication: Option<Publication>,
    pub featured_image: Option<Option<String>>,
    pub metadata: Option<Map<String, Value>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn new(id: ContentId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            categories: None,
            publication: None,
            featured_image: None,
            metadata: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ContentTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ContentBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_categories(mut self, categories: CategoryAssignment) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn with_publication(mut self, publication: Publication) -> Self {
        self.publication = Some(publication);
        self
    }

    pub fn with_featured_image(mut self, featured_image: Option<String>) -> Self {
        self.featured_image = Some(featured_image);
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_content() -> Content {
        let now = Utc::now();
        Content {
            id: ContentId::new(1).unwrap(),
            title: ContentTitle::new("Hello World").unwrap(),
            slug: ContentSlug::new("hello-world").unwrap(),
            body: ContentBody::new("A body that is long enough").unwrap(),
            author_id: UserId::new(1).unwrap(),
            categories: Vec::new(),
            publication: Publication::Draft,
            view_count: 0,
            featured_image: None,
            metadata: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn publish_sets_state_and_touches_updated_at() {
        let mut content = sample_content();
        let now = Utc::now() + Duration::seconds(5);
        content.publish(now);
        assert!(content.is_published());
        assert_eq!(content.published_at(), Some(now));
        assert_eq!(content.updated_at, now);
    }

    #[test]
    fn unpublish_clears_published_at() {
        let mut content = sample_content();
        let now = Utc::now();
        content.publish(now);
        let later = now + Duration::seconds(10);
        content.unpublish(later);
        assert!(!content.is_published());
        assert!(content.published_at().is_none());
        assert_eq!(content.updated_at, later);
    }

    #[test]
    fn authorship_is_by_user_id() {
        let content = sample_content();
        assert!(content.is_authored_by(UserId(1)));
        assert!(!content.is_authored_by(UserId(2)));
    }
}
