use crate::domain::category::Category;
use crate::domain::content::Content;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::serde_time;

/// Excerpt length used in listings.
pub const EXCERPT_CHARS: usize = 150;

/// Cuts `value` to `max_chars` characters, appending `...` when
/// anything was removed.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &value[..byte_idx]),
        None => value.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into(),
            slug: category.slug.into(),
            description: category.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_id: i64,
    pub categories: Vec<CategoryDto>,
    /// `draft`, `scheduled` or `published`.
    pub status: String,
    pub is_published: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub featured_image: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: Map<String, Value>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Content> for ContentDto {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.into(),
            title: content.title.into(),
            slug: content.slug.into(),
            body: content.body.into(),
            author_id: content.author_id.into(),
            categories: content.categories.into_iter().map(Into::into).collect(),
            status: content.publication.label().to_string(),
            is_published: content.publication.is_published(),
            published_at: content.publication.published_at(),
            view_count: content.view_count,
            featured_image: content.featured_image,
            metadata: content.metadata,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author_id: i64,
    pub categories: Vec<CategoryDto>,
    pub status: String,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub featured_image: Option<String>,
}

impl From<Content> for ContentSummaryDto {
    fn from(content: Content) -> Self {
        Self {
            id: content.id.into(),
            excerpt: truncate_chars(content.body.as_str(), EXCERPT_CHARS),
            title: content.title.into(),
            slug: content.slug.into(),
            author_id: content.author_id.into(),
            categories: content.categories.into_iter().map(Into::into).collect(),
            status: content.publication.label().to_string(),
            published_at: content.publication.published_at(),
            view_count: content.view_count,
            featured_image: content.featured_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn long_values_get_an_ellipsis() {
        assert_eq!(truncate_chars("hello world", 5), "hello...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("ééééé", 2), "éé...");
    }
}
