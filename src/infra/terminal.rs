use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::metadata::{CheckinMetadata, MetadataField};
use crate::error::{AppError, AppResult};
use crate::services::MetadataPrompt;

/// Prompts on stdout and reads answers from stdin.
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataPrompt for TerminalPrompt {
    async fn collect(&self) -> AppResult<CheckinMetadata> {
        let answers = tokio::task::spawn_blocking(|| {
            let stdin = io::stdin();
            read_metadata(&mut stdin.lock(), &mut io::stdout())
        });

        tokio::select! {
            result = answers => result.map_err(|err| AppError::Io(io::Error::other(err)))?,
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted during metadata prompt");
                Err(AppError::Cancelled)
            }
        }
    }
}

pub fn read_metadata<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> AppResult<CheckinMetadata> {
    let mut metadata = CheckinMetadata::default();
    for field in MetadataField::ALL {
        let answer = prompt(input, output, field.label())?;
        metadata.set(field, &answer);
    }
    Ok(metadata)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> AppResult<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Cancelled);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
