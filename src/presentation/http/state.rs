// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::domain::document::UploadLimit;
use std::sync::Arc;

/// Router-level knobs that do not belong to any service.
#[derive(Debug, Clone, Default)]
pub struct HttpSettings {
    pub upload_limit: UploadLimit,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl HttpSettings {
    /// Whole-request ceiling: every file may use the full limit, plus room
    /// for the text fields.
    pub fn body_limit_bytes(&self) -> usize {
        const FORM_OVERHEAD: u64 = 1024 * 1024;
        usize::try_from(self.upload_limit.max_bytes().saturating_add(FORM_OVERHEAD))
            .unwrap_or(usize::MAX)
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub settings: HttpSettings,
}
