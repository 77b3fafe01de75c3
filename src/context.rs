use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ClipboardService, MetadataPrompt, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub prompt: Arc<dyn MetadataPrompt>,
    pub clipboard: Arc<dyn ClipboardService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        prompt: Arc<dyn MetadataPrompt>,
        clipboard: Arc<dyn ClipboardService>,
    ) -> Self {
        Self {
            config,
            version_control,
            prompt,
            clipboard,
        }
    }
}
