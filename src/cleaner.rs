use crate::audit::AuditLog;
use crate::config::CleanerConfig;
use crate::error::{CleanError, Result};
use crate::scanner::{self, FileEntry};
use crate::stats::to_kb;
use crate::targets::TargetExtensions;
use log::{debug, warn};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupResult {
    pub deleted_files: usize,
    pub freed_bytes: u64,
}

impl CleanupResult {
    pub fn freed_kb(&self) -> u64 {
        to_kb(self.freed_bytes)
    }
}

pub struct Cleaner {
    targets: TargetExtensions,
    audit: AuditLog,
}

impl Cleaner {
    pub fn new(config: &CleanerConfig) -> Self {
        Self {
            targets: config.targets.clone(),
            audit: AuditLog::new(&config.audit_log),
        }
    }

    pub fn targets(&self) -> &TargetExtensions {
        &self.targets
    }

    /// Deletes every target file directly inside `dir`, in scan order.
    ///
    /// `on_deleted` is called once per removed file. The first filesystem
    /// error aborts the pass; files removed before it stay removed and their
    /// audit lines stay written.
    pub fn clean<F>(&self, dir: &Path, mut on_deleted: F) -> Result<CleanupResult>
    where
        F: FnMut(&FileEntry),
    {
        let mut result = CleanupResult::default();

        for entry in scanner::scan(dir)? {
            let entry = entry?;
            // Classify by name first; only targets get their size read.
            if !self.targets.is_target(entry.path()) {
                continue;
            }
            let entry = entry.into_file_entry()?;

            fs::remove_file(&entry.path).map_err(|err| CleanError::filesystem(&entry.path, err))?;
            debug!("removed {} ({} bytes)", entry.path.display(), entry.size_bytes);

            // Audit is best effort; the deletion already happened.
            if let Err(err) = self.audit.record(&entry.path) {
                warn!(
                    "could not write audit record to {}: {}",
                    self.audit.path().display(),
                    err
                );
            }

            on_deleted(&entry);
            result.deleted_files += 1;
            result.freed_bytes += entry.size_bytes;
        }

        Ok(result)
    }
}
