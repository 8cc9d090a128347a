use crate::error::Result;
use crate::scanner;
use crate::targets::TargetExtensions;
use log::debug;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_files: usize,
    pub target_files: usize,
    pub total_bytes: u64,
}

impl ScanSummary {
    pub fn total_kb(&self) -> u64 {
        to_kb(self.total_bytes)
    }
}

/// Whole kilobytes, truncated.
pub fn to_kb(bytes: u64) -> u64 {
    bytes / 1024
}

/// Counts the files in `dir` and how many of them would be cleaned.
///
/// Read-only: one pass over the scanner, nothing is touched on disk.
pub fn report(dir: &Path, targets: &TargetExtensions) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for entry in scanner::scan(dir)? {
        let entry = entry?.into_file_entry()?;
        summary.total_files += 1;
        summary.total_bytes += entry.size_bytes;
        if targets.is_target(&entry.path) {
            debug!("target: {}", entry.path.display());
            summary.target_files += 1;
        }
    }

    Ok(summary)
}
