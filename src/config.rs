use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const HOME_VAR: &str = "HOME";
const OUTPUT_DIR: &str = "Desktop";
const OUTPUT_FILE: &str = "checkin.html";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_path: PathBuf,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    /// Reads the process environment; there is no config file.
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let home = env::var_os(HOME_VAR)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "{HOME_VAR} is not set; it is needed to locate {OUTPUT_DIR}/{OUTPUT_FILE}"
                ))
            })?;
        Ok(Self::with_home(PathBuf::from(home), workspace_hint))
    }

    pub fn with_home(home_dir: PathBuf, workspace_hint: &Path) -> Self {
        let output_path = home_dir.join(OUTPUT_DIR).join(OUTPUT_FILE);
        Self {
            output_path,
            workspace_root: workspace_hint.to_path_buf(),
        }
    }
}
