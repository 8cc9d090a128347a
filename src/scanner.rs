use crate::error::{CleanError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A regular file found directly inside the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The scanned directory joined with the file name.
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// A regular file as listed, before its size has been read.
#[derive(Debug)]
pub struct ScanEntry {
    entry: DirEntry,
}

impl ScanEntry {
    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    /// Reads the size now, so a file removed since listing fails here.
    pub fn size_bytes(&self) -> Result<u64> {
        self.entry
            .metadata()
            .map(|meta| meta.len())
            .map_err(|err| CleanError::filesystem(self.entry.path(), io_error(err)))
    }

    pub fn into_file_entry(self) -> Result<FileEntry> {
        let size_bytes = self.size_bytes()?;
        Ok(FileEntry {
            path: self.entry.into_path(),
            size_bytes,
        })
    }
}

/// Lists the immediate regular files of `dir`.
///
/// The directory is checked up front; anything that is not an existing
/// directory fails before iteration starts. The returned iterator is lazy and
/// yields entries in whatever order the filesystem returns them. Symlinks,
/// subdirectories and special files are skipped, nothing is recursed into.
/// No metadata is read until [`ScanEntry::size_bytes`] is called.
pub fn scan(dir: &Path) -> Result<impl Iterator<Item = Result<ScanEntry>>> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(CleanError::not_found(dir)),
    }

    let root = dir.to_path_buf();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter();

    Ok(walker.filter_map(move |entry| match entry {
        Ok(entry) if entry.file_type().is_file() => Some(Ok(ScanEntry { entry })),
        Ok(_) => None,
        Err(err) => Some(Err(walk_error(&root, err))),
    }))
}

fn walk_error(root: &Path, err: walkdir::Error) -> CleanError {
    // Failing to list the root itself means the directory is unusable.
    if err.depth() == 0 || err.path() == Some(root) {
        return CleanError::not_found(root);
    }
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    CleanError::filesystem(path, io_error(err))
}

fn io_error(err: walkdir::Error) -> io::Error {
    err.into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"))
}
