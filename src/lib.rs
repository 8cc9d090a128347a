//! Remove temporary, log, cache and backup files from a single directory.
//!
//! A run is two strictly sequential passes over the same directory: a
//! read-only [`stats::report`] followed by [`cleaner::Cleaner::clean`], which
//! deletes every file whose extension is in the configured
//! [`targets::TargetExtensions`] and appends one line per deletion to the
//! [`audit::AuditLog`].

pub mod audit;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod scanner;
pub mod stats;
pub mod targets;

pub use audit::AuditLog;
pub use cleaner::{Cleaner, CleanupResult};
pub use config::CleanerConfig;
pub use error::{CleanError, Result};
pub use scanner::{FileEntry, ScanEntry, scan};
pub use stats::{ScanSummary, report};
pub use targets::TargetExtensions;
