// src/infrastructure/repositories/postgres_role.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewRole, Role, RoleId, RoleName, RoleRepository};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: i64,
    name: String,
    description: String,
}

impl TryFrom<RoleRow> for Role {
    type Error = DomainError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role {
            id: RoleId::new(row.id)?,
            name: RoleName::new(row.name)?,
            description: row.description,
        })
    }
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn list(&self) -> DomainResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>("SELECT id, name, description FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Role::try_from).collect()
    }

    async fn find_by_id(&self, id: RoleId) -> DomainResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>("SELECT id, name, description FROM roles WHERE id = $1")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Role::try_from).transpose()
    }

    async fn find_by_name(&self, name: &RoleName) -> DomainResult<Option<Role>> {
        let row =
            sqlx::query_as::<_, RoleRow>("SELECT id, name, description FROM roles WHERE name = $1")
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        row.map(Role::try_from).transpose()
    }

    async fn get_or_create(&self, role: NewRole) -> DomainResult<(Role, bool)> {
        let inserted = sqlx::query_as::<_, RoleRow>(
            "INSERT INTO roles (name, description) VALUES ($1, $2)
             ON CONFLICT (name) DO NOTHING
             RETURNING id, name, description",
        )
        .bind(role.name.as_str())
        .bind(&role.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if let Some(row) = inserted {
            return Ok((Role::try_from(row)?, true));
        }

        let existing = self
            .find_by_name(&role.name)
            .await?
            .ok_or_else(|| DomainError::Persistence("role vanished during get_or_create".into()))?;
        Ok((existing, false))
    }

    async fn delete(&self, id: RoleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("role not found".into()));
        }
        Ok(())
    }
}
