use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::context::AppContext;
use crate::domain::commit::{CommitInfo, CommitRef};
use crate::domain::document::CheckinDocument;
use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct CheckinOutcome {
    pub commit: CommitInfo,
    pub output_path: PathBuf,
    pub files_listed: usize,
    pub files_skipped: usize,
}

pub async fn prepare_checkin(ctx: &AppContext, commit: &CommitRef) -> AppResult<CheckinOutcome> {
    let vcs = &ctx.version_control;
    let (changes, branches, header) = tokio::try_join!(
        vcs.changed_files(commit),
        vcs.containing_branches(commit),
        vcs.commit_header(commit)
    )?;

    let metadata = ctx.prompt.collect().await?;

    let html = CheckinDocument {
        commit: &header,
        metadata: &metadata,
        branches: &branches,
        changes: &changes,
    }
    .render();

    let output_path = ctx.config.output_path.clone();
    write_document(&output_path, &html)?;
    info!(path = %output_path.display(), "wrote check-in document");

    ctx.clipboard.publish_html(&output_path).await?;
    info!("check-in copied to clipboard");

    Ok(CheckinOutcome {
        commit: header,
        output_path,
        files_listed: changes.counted(),
        files_skipped: changes.skipped().len(),
    })
}

fn write_document(path: &Path, html: &str) -> AppResult<()> {
    fs::write(path, html).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })
}
