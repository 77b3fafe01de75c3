use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait ClipboardService: Send + Sync {
    async fn publish_html(&self, file: &Path) -> AppResult<()>;
}
