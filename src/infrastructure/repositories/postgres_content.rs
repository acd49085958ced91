// src/infrastructure/repositories/postgres_content.rs
use super::error::map_sqlx;
use super::postgres_category::{CategoryRow, get_or_create_category};
use crate::domain::category::{Category, CategoryAssignment};
use crate::domain::content::{
    AuthorStats, Content, ContentBody, ContentFilter, ContentId, ContentReadRepository,
    ContentSlug, ContentTitle, ContentUpdate, ContentWriteRepository, NewContent, PageRequest,
    Publication, RemovedContent,
};
use crate::domain::document::DocumentDraft;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const CONTENT_COLUMNS: &str = "id, title, slug, body, author_id, is_published, published_at, \
     view_count, featured_image, metadata, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    author_id: i64,
    is_published: bool,
    published_at: Option<DateTime<Utc>>,
    view_count: i64,
    featured_image: Option<String>,
    metadata: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for Content {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let metadata = match row.metadata.0 {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(Content {
            id: ContentId::new(row.id)?,
            title: ContentTitle::new(row.title)?,
            slug: ContentSlug::new(row.slug)?,
            body: ContentBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            categories: Vec::new(),
            publication: Publication::from_columns(row.is_published, row.published_at)?,
            view_count: row.view_count,
            featured_image: row.featured_image,
            metadata,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct LinkedCategoryRow {
    content_id: i64,
    #[sqlx(flatten)]
    category: CategoryRow,
}

#[derive(Debug, FromRow)]
struct StatsRow {
    total: i64,
    published: i64,
    scheduled: i64,
    drafts: i64,
    total_views: i64,
}

/// Converts rows and fills in each item's categories with one query.
async fn hydrate(conn: &mut PgConnection, rows: Vec<ContentRow>) -> DomainResult<Vec<Content>> {
    let mut contents = rows
        .into_iter()
        .map(Content::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    if contents.is_empty() {
        return Ok(contents);
    }

    let ids: Vec<i64> = contents.iter().map(|content| content.id.0).collect();
    let linked = sqlx::query_as::<_, LinkedCategoryRow>(
        "SELECT cc.content_id, c.id, c.name, c.slug, c.description
         FROM content_categories cc
         JOIN categories c ON c.id = cc.category_id
         WHERE cc.content_id = ANY($1)
         ORDER BY c.name, c.id",
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    let mut by_content: HashMap<i64, Vec<Category>> = HashMap::new();
    for row in linked {
        by_content
            .entry(row.content_id)
            .or_default()
            .push(Category::try_from(row.category)?);
    }
    for content in &mut contents {
        content.categories = by_content.remove(&content.id.0).unwrap_or_default();
    }
    Ok(contents)
}

async fn hydrate_one(conn: &mut PgConnection, row: ContentRow) -> DomainResult<Content> {
    hydrate(conn, vec![row])
        .await?
        .pop()
        .ok_or_else(|| DomainError::Persistence("content row vanished while loading".into()))
}

async fn link_categories(
    conn: &mut PgConnection,
    content_id: i64,
    assignment: CategoryAssignment,
) -> DomainResult<()> {
    let mut ids: Vec<i64> = assignment.existing.iter().map(|id| id.0).collect();
    if let Some(new_category) = assignment.create {
        let id = get_or_create_category(conn, new_category).await?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO content_categories (content_id, category_id)
         SELECT $1, UNNEST($2::BIGINT[])
         ON CONFLICT DO NOTHING",
    )
    .bind(content_id)
    .bind(&ids)
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

async fn attach_document(
    conn: &mut PgConnection,
    content_id: i64,
    document: DocumentDraft,
) -> DomainResult<()> {
    let size = i64::try_from(document.file.size)
        .map_err(|_| DomainError::Validation("document is too large".into()))?;
    sqlx::query(
        "INSERT INTO documents
            (title, content_id, file_key, file_name, file_content_type, file_size, uploaded_by, uploaded_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(document.title.as_str())
    .bind(content_id)
    .bind(&document.file.key)
    .bind(&document.file.original_name)
    .bind(document.file.content_type.as_deref())
    .bind(size)
    .bind(i64::from(document.uploaded_by))
    .bind(document.uploaded_at)
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn create(&self, content: NewContent) -> DomainResult<Content> {
        let NewContent {
            title,
            slug,
            body,
            author_id,
            categories,
            publication,
            featured_image,
            metadata,
            document,
            created_at,
        } = content;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO contents
                (title, slug, body, author_id, is_published, published_at, featured_image, metadata, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(publication.is_published())
        .bind(publication.published_at())
        .bind(featured_image)
        .bind(Json(Value::Object(metadata)))
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let content_id = row.id;
        link_categories(&mut tx, content_id, categories).await?;
        if let Some(document) = document {
            attach_document(&mut tx, content_id, document).await?;
        }

        let created = hydrate_one(&mut tx, row).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<Content> {
        let ContentUpdate {
            id,
            title,
            body,
            categories,
            publication,
            featured_image,
            metadata,
            original_updated_at,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE contents SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }

        if let Some(publication) = publication {
            builder.push(", is_published = ");
            builder.push_bind(publication.is_published());
            builder.push(", published_at = ");
            builder.push_bind(publication.published_at());
        }

        if let Some(featured_image) = featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(featured_image);
        }

        if let Some(metadata) = metadata {
            builder.push(", metadata = ");
            builder.push_bind(Json(Value::Object(metadata)));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.0);
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(CONTENT_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ContentRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = maybe_row else {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM contents WHERE id = $1)",
            )
            .bind(id.0)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
            return Err(if exists {
                DomainError::Conflict("content update conflict, please retry".into())
            } else {
                DomainError::NotFound("content not found".into())
            });
        };

        if let Some(assignment) = categories {
            sqlx::query("DELETE FROM content_categories WHERE content_id = $1")
                .bind(id.0)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            link_categories(&mut tx, id.0, assignment).await?;
        }

        let updated = hydrate_one(&mut tx, row).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<RemovedContent> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let file_keys = sqlx::query_scalar::<_, String>(
            "SELECT file_key FROM documents WHERE content_id = $1",
        )
        .bind(id.0)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id.0)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("content not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(RemovedContent { file_keys })
    }

    async fn set_publication_bulk(
        &self,
        ids: &[ContentId],
        publish: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();
        let sql = if publish {
            "UPDATE contents
             SET is_published = TRUE, published_at = COALESCE(published_at, $2), updated_at = $2
             WHERE id = ANY($1) AND is_published = FALSE"
        } else {
            "UPDATE contents
             SET is_published = FALSE, published_at = NULL, updated_at = $2
             WHERE id = ANY($1) AND (is_published OR published_at IS NOT NULL)"
        };

        let result = sqlx::query(sql)
            .bind(&ids)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn publish_due(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = sqlx::query(
            "UPDATE contents SET is_published = TRUE, updated_at = $1
             WHERE is_published = FALSE AND published_at IS NOT NULL AND published_at <= $1",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn increment_view_count(&self, id: ContentId) -> DomainResult<()> {
        sqlx::query("UPDATE contents SET view_count = view_count + 1 WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

/// `%` and `_` in user input match literally.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ContentFilter) {
    builder.push(" WHERE TRUE");

    if filter.published_only {
        builder.push(" AND is_published = TRUE");
    }

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        builder.push(" AND (title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR body ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if let Some(category) = &filter.category {
        builder.push(
            " AND EXISTS (SELECT 1 FROM content_categories cc
               JOIN categories c ON c.id = cc.category_id
               WHERE cc.content_id = contents.id AND c.slug = ",
        );
        builder.push_bind(category.as_str().to_string());
        builder.push(")");
    }

    if let Some(author) = filter.author {
        builder.push(" AND author_id = ");
        builder.push_bind(i64::from(author));
    }
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<Content>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM contents WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => hydrate_one(&mut conn, row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &ContentSlug) -> DomainResult<Option<Content>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM contents WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => hydrate_one(&mut conn, row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: &ContentFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Content>, u64)> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM contents");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CONTENT_COLUMNS} FROM contents"));
        push_filters(&mut select, filter);
        select.push(" ORDER BY published_at DESC NULLS LAST, created_at DESC, id DESC LIMIT ");
        select.push_bind(page.limit() as i64);
        select.push(" OFFSET ");
        select.push_bind(page.offset() as i64);

        let rows = select
            .build_query_as::<ContentRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let contents = hydrate(&mut conn, rows).await?;
        Ok((contents, total.max(0) as u64))
    }

    async fn stats_for_author(&self, author: UserId) -> DomainResult<AuthorStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE is_published) AS published,
                COUNT(*) FILTER (WHERE NOT is_published AND published_at IS NOT NULL) AS scheduled,
                COUNT(*) FILTER (WHERE NOT is_published AND published_at IS NULL) AS drafts,
                COALESCE(SUM(view_count), 0)::BIGINT AS total_views
             FROM contents WHERE author_id = $1",
        )
        .bind(i64::from(author))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(AuthorStats {
            total: row.total.max(0) as u64,
            published: row.published.max(0) as u64,
            scheduled: row.scheduled.max(0) as u64,
            drafts: row.drafts.max(0) as u64,
            total_views: row.total_views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_wildcards_in_queries_are_escaped() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("rust"), "%rust%");
    }
}
