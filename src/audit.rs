use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only record of deletions, one line per file.
///
/// The file is opened for each record and closed again straight after the
/// write; no handle is held between calls.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self, deleted: &Path) -> io::Result<()> {
        self.record_at(deleted, Local::now())
    }

    pub fn record_at(&self, deleted: &Path, at: DateTime<Local>) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_record(deleted, at))
    }
}

/// `[YYYY-MM-DD HH:MM:SS] Deleted: <path>`
pub fn format_record(deleted: &Path, at: DateTime<Local>) -> String {
    format!(
        "[{}] Deleted: {}",
        at.format(TIMESTAMP_FORMAT),
        deleted.display()
    )
}
