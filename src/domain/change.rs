use tracing::warn;

use crate::error::{AppError, AppResult, LookupStep};

/// How a path changed, keyed on the first character of the diff status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    Added,
    Modified,
    Renamed,
    Deleted,
    Other(String),
}

impl ChangeStatus {
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('A') => ChangeStatus::Added,
            Some('M') => ChangeStatus::Modified,
            Some('R') => ChangeStatus::Renamed,
            Some('D') => ChangeStatus::Deleted,
            _ => ChangeStatus::Other(code.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ChangeStatus::Added => "A",
            ChangeStatus::Modified => "M",
            ChangeStatus::Renamed => "R",
            ChangeStatus::Deleted => "D",
            ChangeStatus::Other(code) => code,
        }
    }

    pub fn category(&self) -> Option<ChangeCategory> {
        match self {
            ChangeStatus::Added => Some(ChangeCategory::New),
            ChangeStatus::Modified => Some(ChangeCategory::Modified),
            ChangeStatus::Renamed => Some(ChangeCategory::Renamed),
            ChangeStatus::Deleted => Some(ChangeCategory::Deleted),
            ChangeStatus::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    New,
    Modified,
    Renamed,
    Deleted,
}

impl ChangeCategory {
    /// Render order of the file listings.
    pub const ALL: [ChangeCategory; 4] = [
        ChangeCategory::New,
        ChangeCategory::Modified,
        ChangeCategory::Renamed,
        ChangeCategory::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCategory::New => "New",
            ChangeCategory::Modified => "Modified",
            ChangeCategory::Renamed => "Renamed",
            ChangeCategory::Deleted => "Deleted",
        }
    }

    fn index(&self) -> usize {
        match self {
            ChangeCategory::New => 0,
            ChangeCategory::Modified => 1,
            ChangeCategory::Renamed => 2,
            ChangeCategory::Deleted => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub status: ChangeStatus,
    pub path: String,
    /// Only set for renames.
    pub destination: Option<String>,
}

impl ChangeRecord {
    /// Parses one `STATUS<TAB>PATH[<TAB>DEST]` line of `git diff-tree --name-status`.
    pub fn parse_line(line: &str) -> AppResult<Self> {
        let fields = line.split('\t').collect::<Vec<_>>();
        let status = ChangeStatus::from_code(fields[0]);

        let expected = match status {
            ChangeStatus::Renamed => 3..=3,
            ChangeStatus::Other(_) => 2..=3,
            _ => 2..=2,
        };
        if fields[0].is_empty() || !expected.contains(&fields.len()) {
            return Err(AppError::MalformedOutput {
                step: LookupStep::ChangedFiles,
                message: format!(
                    "expected {} tab-separated fields, got {}: '{line}'",
                    if expected.start() == expected.end() {
                        expected.start().to_string()
                    } else {
                        format!("{} or {}", expected.start(), expected.end())
                    },
                    fields.len()
                ),
            });
        }

        let destination = match status {
            ChangeStatus::Renamed => Some(fields[2].to_string()),
            _ => None,
        };

        Ok(Self {
            status,
            path: fields[1].to_string(),
            destination,
        })
    }
}

/// Changed paths of one commit, bucketed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    buckets: [Vec<ChangeRecord>; 4],
    skipped: Vec<ChangeRecord>,
}

impl ChangeSet {
    pub fn parse(output: &str) -> AppResult<Self> {
        let mut set = ChangeSet::default();
        for line in output.lines().filter(|line| !line.trim().is_empty()) {
            set.push(ChangeRecord::parse_line(line)?);
        }
        Ok(set)
    }

    pub fn push(&mut self, record: ChangeRecord) {
        match record.status.category() {
            Some(category) => self.buckets[category.index()].push(record),
            None => {
                warn!(
                    status = record.status.code(),
                    path = %record.path,
                    "skipping change with unrecognized status"
                );
                self.skipped.push(record);
            }
        }
    }

    pub fn records(&self, category: ChangeCategory) -> &[ChangeRecord] {
        &self.buckets[category.index()]
    }

    /// Non-empty categories in render order.
    pub fn sections(&self) -> impl Iterator<Item = (ChangeCategory, &[ChangeRecord])> {
        ChangeCategory::ALL
            .into_iter()
            .map(|category| (category, self.records(category)))
            .filter(|(_, records)| !records.is_empty())
    }

    pub fn skipped(&self) -> &[ChangeRecord] {
        &self.skipped
    }

    pub fn counted(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
