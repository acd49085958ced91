use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub content_id: i64,
    pub author_id: i64,
    pub body: String,
    pub is_approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            content_id: comment.content_id.into(),
            author_id: comment.author_id.into(),
            body: comment.body.to_string(),
            is_approved: comment.is_approved,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
