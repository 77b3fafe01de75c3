use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult, LookupStep};

/// Commit identifier as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef(String);

impl CommitRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CommitRef {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err("commit reference must not be empty".to_string());
        }
        if value.starts_with('-') {
            return Err(format!("'{value}' is not a commit reference"));
        }
        Ok(Self(value.to_string()))
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub message: String,
}

impl CommitInfo {
    /// Picks the single `git log --pretty=oneline` line mentioning `reference`.
    pub fn from_log(log: &str, reference: &CommitRef) -> AppResult<Self> {
        let matches = log
            .lines()
            .filter(|line| line.contains(reference.as_str()))
            .collect::<Vec<_>>();

        match matches.as_slice() {
            [] => Err(AppError::CommitNotFound(reference.to_string())),
            [line] => Self::parse_line(line),
            _ => Err(AppError::AmbiguousCommit {
                reference: reference.to_string(),
                count: matches.len(),
            }),
        }
    }

    pub fn parse_line(line: &str) -> AppResult<Self> {
        let malformed = || AppError::MalformedOutput {
            step: LookupStep::CommitHeader,
            message: format!("expected '<hash> <message>', got '{}'", line.trim_end()),
        };

        let (hash, message) = line
            .trim_end_matches(['\r', '\n'])
            .split_once(char::is_whitespace)
            .ok_or_else(malformed)?;
        if hash.is_empty() {
            return Err(malformed());
        }
        // Commits made with --allow-empty-message print as "<hash> ".
        let message = message.trim();

        Ok(Self {
            hash: hash.to_string(),
            message: message.to_string(),
        })
    }

    /// Message up to the first colon, e.g. `Fix` for `Fix: off-by-one`.
    pub fn task(&self) -> &str {
        self.message
            .split_once(':')
            .map(|(task, _)| task)
            .unwrap_or(self.message.as_str())
    }
}
