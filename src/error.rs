use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The git lookups a check-in is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStep {
    ChangedFiles,
    Branches,
    CommitHeader,
}

impl LookupStep {
    pub fn command(&self) -> &'static str {
        match self {
            LookupStep::ChangedFiles => "git diff-tree",
            LookupStep::Branches => "git branch",
            LookupStep::CommitHeader => "git log",
        }
    }
}

impl fmt::Display for LookupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupStep::ChangedFiles => "changed file listing",
            LookupStep::Branches => "branch lookup",
            LookupStep::CommitHeader => "commit header lookup",
        };
        write!(f, "{label} ({})", self.command())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("version control error: {step} failed: {message}")]
    VersionControl { step: LookupStep, message: String },
    #[error("unexpected output from {step}: {message}")]
    MalformedOutput { step: LookupStep, message: String },
    #[error("no commit matching '{0}' in git log")]
    CommitNotFound(String),
    #[error("commit reference '{reference}' is ambiguous: {count} git log entries match")]
    AmbiguousCommit { reference: String, count: usize },
    #[error("failed to write {}: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },
    #[error("clipboard error: {0}")]
    Clipboard(String),
    #[error("cancelled by operator")]
    Cancelled,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
