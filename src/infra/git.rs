use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::branch::BranchList;
use crate::domain::change::ChangeSet;
use crate::domain::commit::{CommitInfo, CommitRef};
use crate::error::{AppError, AppResult, LookupStep};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn diff_tree_args(commit: &CommitRef) -> Vec<&str> {
        vec![
            "diff-tree",
            "--no-commit-id",
            "--name-status",
            "-r",
            "-M",
            "--root",
            commit.as_str(),
        ]
    }

    fn branch_args(commit: &CommitRef) -> Vec<&str> {
        vec!["branch", "-r", "--contains", commit.as_str()]
    }

    fn log_args() -> Vec<&'static str> {
        vec!["log", "--pretty=oneline"]
    }

    async fn run(&self, step: LookupStep, args: &[&str]) -> AppResult<String> {
        debug!(%step, ?args, cwd = %self.workspace_root.display(), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| AppError::VersionControl {
                step,
                message: format!("failed to run git: {err}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl {
                step,
                message: format!("git exited with {}: {}", output.status, stderr.trim()),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| AppError::MalformedOutput {
            step,
            message: "output is not valid UTF-8".to_string(),
        })
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn changed_files(&self, commit: &CommitRef) -> AppResult<ChangeSet> {
        let output = self
            .run(LookupStep::ChangedFiles, &Self::diff_tree_args(commit))
            .await?;
        let changes = ChangeSet::parse(&output)?;
        debug!(
            counted = changes.counted(),
            skipped = changes.skipped().len(),
            "collected changed files"
        );
        Ok(changes)
    }

    async fn containing_branches(&self, commit: &CommitRef) -> AppResult<BranchList> {
        let output = self
            .run(LookupStep::Branches, &Self::branch_args(commit))
            .await?;
        Ok(BranchList::parse(&output))
    }

    async fn commit_header(&self, commit: &CommitRef) -> AppResult<CommitInfo> {
        let output = self.run(LookupStep::CommitHeader, &Self::log_args()).await?;
        CommitInfo::from_log(&output, commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit() -> CommitRef {
        "abc123".parse().unwrap()
    }

    #[test]
    fn diff_tree_detects_renames_for_one_commit() {
        let commit = commit();
        let args = GitCli::diff_tree_args(&commit);
        assert_eq!(args.first(), Some(&"diff-tree"));
        assert!(args.contains(&"--name-status"));
        assert!(args.contains(&"-M"));
        assert_eq!(args.last(), Some(&"abc123"));
    }

    #[test]
    fn branch_lookup_lists_remote_branches_only() {
        let commit = commit();
        assert_eq!(
            GitCli::branch_args(&commit),
            vec!["branch", "-r", "--contains", "abc123"]
        );
    }

    #[tokio::test]
    async fn missing_workspace_is_a_labelled_error() {
        let git = GitCli::new(PathBuf::from("/nonexistent/checkin-workspace"));
        let err = git.containing_branches(&commit()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::VersionControl {
                step: LookupStep::Branches,
                ..
            }
        ));
    }
}
