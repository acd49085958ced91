// src/infrastructure/repositories/postgres_category.rs
use super::error::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            description: row.description,
        })
    }
}

/// Inserts the category unless one with the same name exists, returning
/// the id either way.
pub(super) async fn get_or_create_category(
    conn: &mut PgConnection,
    category: NewCategory,
) -> DomainResult<i64> {
    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO categories (name, slug, description) VALUES ($1, $2, $3)
         ON CONFLICT (name) DO NOTHING
         RETURNING id",
    )
    .bind(category.name.as_str())
    .bind(category.slug.as_str())
    .bind(&category.description)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    if let Some(id) = inserted {
        return Ok(id);
    }

    sqlx::query_scalar::<_, i64>("SELECT id FROM categories WHERE name = $1")
        .bind(category.name.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description FROM categories ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description FROM categories WHERE id = ANY($1) ORDER BY name, id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description FROM categories WHERE name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, description FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, description) VALUES ($1, $2, $3)
             RETURNING id, name, slug, description",
        )
        .bind(category.name.as_str())
        .bind(category.slug.as_str())
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}
