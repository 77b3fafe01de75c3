use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::ClipboardService;

const HTML_MIME: &str = "text/html";

/// Loads files onto the X clipboard through `xclip`.
pub struct Xclip {
    program: String,
}

impl Xclip {
    pub fn new() -> Self {
        Self::with_program("xclip")
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardService for Xclip {
    async fn publish_html(&self, file: &Path) -> AppResult<()> {
        debug!(program = %self.program, file = %file.display(), "publishing to clipboard");

        let status = Command::new(&self.program)
            .args(["-selection", "clipboard", "-t", HTML_MIME])
            .arg(file)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|err| {
                AppError::Clipboard(format!(
                    "failed to run {}: {err}; {} was still written",
                    self.program,
                    file.display()
                ))
            })?;

        if !status.success() {
            return Err(AppError::Clipboard(format!(
                "{} exited with {status}; {} was still written",
                self.program,
                file.display()
            )));
        }
        Ok(())
    }
}
