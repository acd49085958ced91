use super::ContentCommandService;
use crate::{application::error::ApplicationResult, domain::content::ContentId};

impl ContentCommandService {
    pub async fn record_view(&self, id: i64) -> ApplicationResult<()> {
        let id = ContentId::new(id)?;
        self.write_repo.increment_view_count(id).await?;
        Ok(())
    }
}
