// src/bootstrap.rs
use crate::application::{
    ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager},
        storage::FileStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, Ports, Repositories, ServiceSettings},
};
use crate::config::AppConfig;
use crate::infrastructure::{
    repositories::{
        PostgresCategoryRepository, PostgresCommentRepository, PostgresContentReadRepository,
        PostgresContentWriteRepository, PostgresDocumentRepository, PostgresRoleRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    storage::LocalFileStorage,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        roles: Arc::new(PostgresRoleRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        content_write: Arc::new(PostgresContentWriteRepository::new(pool.clone())),
        content_read: Arc::new(PostgresContentReadRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        documents: Arc::new(PostgresDocumentRepository::new(pool.clone())),
    }
}

/// Wires the Postgres repositories and production adapters into the
/// application services.
pub fn build_services(config: &AppConfig, pool: &PgPool) -> ApplicationResult<ApplicationServices> {
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let storage: Arc<dyn FileStorage> = Arc::new(LocalFileStorage::new(config.media_root()));

    let ports = Ports {
        password_hasher,
        token_manager,
        clock,
        slugger,
        storage,
    };
    let settings = ServiceSettings {
        upload_limit: config.upload_limit(),
        comments_require_moderation: config.comments_require_moderation(),
    };

    Ok(ApplicationServices::new(
        postgres_repositories(pool),
        ports,
        settings,
    ))
}

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
