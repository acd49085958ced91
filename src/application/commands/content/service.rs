// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{storage::FileStorage, time::Clock},
    domain::{
        category::{CategoryRepository, CategorySlugService},
        content::{ContentReadRepository, ContentSlugService, ContentWriteRepository},
        document::UploadLimit,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSettings {
    pub upload_limit: UploadLimit,
}

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) slug_service: Arc<ContentSlugService>,
    pub(super) category_slug_service: Arc<CategorySlugService>,
    pub(super) storage: Arc<dyn FileStorage>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: ContentSettings,
}

impl ContentCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        slug_service: Arc<ContentSlugService>,
        category_slug_service: Arc<CategorySlugService>,
        storage: Arc<dyn FileStorage>,
        clock: Arc<dyn Clock>,
        settings: ContentSettings,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            slug_service,
            category_slug_service,
            storage,
            clock,
            settings,
        }
    }
}
