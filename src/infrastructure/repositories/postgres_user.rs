// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    NewUser, PasswordHash, Role, RoleId, RoleName, User, UserId, UserRepository, UserUpdate,
    Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const USER_SELECT: &str = "SELECT u.id, u.username, u.password_hash, u.bio, u.avatar, u.is_active, \
     u.created_at, r.id AS role_id, r.name AS role_name, r.description AS role_description \
     FROM users u LEFT JOIN roles r ON r.id = u.role_id";

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    bio: String,
    avatar: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    role_id: Option<i64>,
    role_name: Option<String>,
    role_description: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = match (row.role_id, row.role_name) {
            (Some(id), Some(name)) => Some(Role {
                id: RoleId::new(id)?,
                name: RoleName::new(name)?,
                description: row.role_description.unwrap_or_default(),
            }),
            _ => None,
        };

        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role,
            bio: row.bio,
            avatar: row.avatar,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

impl PostgresUserRepository {
    async fn load(&self, id: i64) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{USER_SELECT} WHERE u.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        User::try_from(row)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            password_hash,
            role_id,
            is_active,
            created_at,
        } = new_user;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (username, password_hash, role_id, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(role_id.map(i64::from))
        .bind(is_active)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.load(id).await
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            bio,
            avatar,
            role_id,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET ");
        let mut separated = builder.separated(", ");
        // keeps the statement valid when nothing else changes
        separated.push("id = id");

        if let Some(bio) = bio {
            separated.push("bio = ");
            separated.push_bind_unseparated(bio);
        }

        if let Some(avatar) = avatar {
            separated.push("avatar = ");
            separated.push_bind_unseparated(avatar);
        }

        if let Some(role_id) = role_id {
            separated.push("role_id = ");
            separated.push_bind_unseparated(role_id.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.0);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }

        self.load(id.0).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{USER_SELECT} WHERE u.username = $1"))
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{USER_SELECT} WHERE u.id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}
