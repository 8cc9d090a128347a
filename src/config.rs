use crate::targets::TargetExtensions;
use std::path::PathBuf;

/// Relative to the working directory of the process.
pub const DEFAULT_AUDIT_LOG: &str = "file_cleaner.log";

/// Settings shared by the stats and cleanup passes.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub targets: TargetExtensions,
    pub audit_log: PathBuf,
}

impl CleanerConfig {
    pub fn with_audit_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.audit_log = path.into();
        self
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            targets: TargetExtensions::default(),
            audit_log: PathBuf::from(DEFAULT_AUDIT_LOG),
        }
    }
}
