use std::path::Path;

/// Suffixes marking a file as disposable, in match order.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".tmp", ".log", ".cache", ".bak"];

/// The set of extensions the cleaner deletes.
///
/// Fixed once built. Both the stats pass and the cleanup pass must be handed
/// the same set so the reported target count matches what gets deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetExtensions {
    extensions: Vec<String>,
}

impl TargetExtensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff the file name's extension is exactly one of the targets.
    ///
    /// Case-sensitive, no wildcards. A file with no dot in its name never
    /// matches.
    pub fn is_target(&self, path: &Path) -> bool {
        let Some(ext) = extension_of(path) else {
            return false;
        };
        self.extensions.iter().any(|target| *target == ext)
    }
}

impl Default for TargetExtensions {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

/// Everything from the last '.' of the final path segment, dot included.
///
/// Unlike `Path::extension`, a dotfile such as `.tmp` yields `.tmp`.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let dot = name.rfind('.')?;
    Some(name[dot..].to_string())
}
