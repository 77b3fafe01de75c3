pub mod clipboard;
pub mod prompt;
pub mod version_control;

pub use clipboard::ClipboardService;
pub use prompt::MetadataPrompt;
pub use version_control::VersionControlService;
