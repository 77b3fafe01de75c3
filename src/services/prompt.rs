use async_trait::async_trait;

use crate::domain::metadata::CheckinMetadata;
use crate::error::AppResult;

#[async_trait]
pub trait MetadataPrompt: Send + Sync {
    /// Asks the operator for every metadata field. Aborting yields `AppError::Cancelled`.
    async fn collect(&self) -> AppResult<CheckinMetadata>;
}
