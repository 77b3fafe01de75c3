use async_trait::async_trait;

use crate::domain::branch::BranchList;
use crate::domain::change::ChangeSet;
use crate::domain::commit::{CommitInfo, CommitRef};
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Files changed by `commit` against its parent, bucketed by category.
    async fn changed_files(&self, commit: &CommitRef) -> AppResult<ChangeSet>;
    /// Remote branches that contain `commit`.
    async fn containing_branches(&self, commit: &CommitRef) -> AppResult<BranchList>;
    async fn commit_header(&self, commit: &CommitRef) -> AppResult<CommitInfo>;
}
