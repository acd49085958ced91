// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::content::ContentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str = "id, content_id, author_id, body, is_approved, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content_id: i64,
    author_id: i64,
    body: String,
    is_approved: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content_id: ContentId::new(row.content_id)?,
            author_id: UserId::new(row.author_id)?,
            body: CommentBody::new(row.body)?,
            is_approved: row.is_approved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (content_id, author_id, body, is_approved, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(comment.content_id.0)
        .bind(comment.author_id.0)
        .bind(comment.body.as_str())
        .bind(comment.is_approved)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn list_for_content(
        &self,
        content_id: ContentId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE content_id = $1 AND (is_approved OR NOT $2)
             ORDER BY created_at, id"
        ))
        .bind(content_id.0)
        .bind(approved_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn list_pending(&self) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments WHERE is_approved = FALSE ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn set_approval(
        &self,
        ids: &[CommentId],
        approved: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();
        let result = sqlx::query(
            "UPDATE comments SET is_approved = $2, updated_at = $3
             WHERE id = ANY($1) AND is_approved <> $2",
        )
        .bind(&ids)
        .bind(approved)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn count_pending_for_author(&self, author: UserId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments cm
             JOIN contents c ON c.id = cm.content_id
             WHERE c.author_id = $1 AND cm.is_approved = FALSE",
        )
        .bind(author.0)
        .fetch_one(&self.pool)
        .await
        .map(|count| count.max(0) as u64)
        .map_err(map_sqlx)
    }
}
