use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::content::ContentId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub content_id: ContentId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn approve(&mut self, now: DateTime<Utc>) {
        self.is_approved = true;
        self.updated_at = now;
    }

    pub fn unapprove(&mut self, now: DateTime<Utc>) {
        self.is_approved = false;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content_id: ContentId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    /// Moderated comments start unapproved.
    pub fn new(
        content_id: ContentId,
        author_id: UserId,
        body: CommentBody,
        requires_moderation: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content_id,
            author_id,
            body,
            is_approved: !requires_moderation,
            created_at,
        }
    }
}
