use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CleanError>;

#[derive(Error, Debug)]
pub enum CleanError {
    /// The path is missing, is not a directory, or cannot be listed.
    #[error("directory does not exist or is inaccessible: {}", path.display())]
    NotFoundOrInaccessible { path: PathBuf },

    /// A size query or removal failed on one entry.
    #[error("filesystem error on {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CleanError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        CleanError::NotFoundOrInaccessible { path: path.into() }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CleanError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
