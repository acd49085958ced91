// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        capability::ensure_capability,
        commands::{
            categories::CategoryCommandService,
            comments::CommentCommandService,
            content::{ContentCommandService, ContentSettings},
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::{PasswordHasher, TokenManager},
            storage::FileStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, comments::CommentQueryService,
            content::ContentQueryService, users::UserQueryService,
        },
    },
    domain::{
        category::{CategoryRepository, CategorySlugService},
        comment::CommentRepository,
        content::{ContentReadRepository, ContentSlugService, ContentWriteRepository},
        document::{DocumentRepository, UploadLimit},
        user::{RoleRepository, UserRepository},
    },
};

/// Storage adapters the services are wired against.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub content_write: Arc<dyn ContentWriteRepository>,
    pub content_read: Arc<dyn ContentReadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub documents: Arc<dyn DocumentRepository>,
}

#[derive(Clone)]
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub storage: Arc<dyn FileStorage>,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub upload_limit: UploadLimit,
    pub comments_require_moderation: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            upload_limit: UploadLimit::default(),
            comments_require_moderation: true,
        }
    }
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub content_commands: Arc<ContentCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports, settings: ServiceSettings) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.roles),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.clock),
        ));

        let slug_service = Arc::new(ContentSlugService::new(
            Arc::clone(&repos.content_read),
            Arc::clone(&ports.slugger),
        ));
        let category_slug_service = Arc::new(CategorySlugService::new(
            Arc::clone(&repos.categories),
            Arc::clone(&ports.slugger),
        ));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&repos.content_write),
            Arc::clone(&repos.content_read),
            Arc::clone(&repos.categories),
            slug_service,
            Arc::clone(&category_slug_service),
            Arc::clone(&ports.storage),
            Arc::clone(&ports.clock),
            ContentSettings {
                upload_limit: settings.upload_limit,
            },
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comments),
            Arc::clone(&repos.content_read),
            Arc::clone(&ports.clock),
            settings.comments_require_moderation,
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.categories),
            category_slug_service,
        ));

        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&repos.content_read),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.comments),
            Arc::clone(&repos.documents),
            settings.upload_limit,
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&repos.categories)));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&repos.comments)));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.roles),
            Arc::clone(&repos.content_read),
        ));

        Self {
            user_commands,
            content_commands,
            comment_commands,
            category_commands,
            content_queries,
            category_queries,
            comment_queries,
            user_queries,
            token_manager: ports.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Authenticate a raw bearer token and ensure the subject holds the
    /// given capability.
    pub async fn authenticate_and_authorize(
        &self,
        token: &str,
        resource: &str,
        action: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        ensure_capability(&user, resource, action)?;
        Ok(user)
    }
}
