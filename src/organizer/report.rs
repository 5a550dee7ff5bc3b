use serde::Serialize;
use std::path::PathBuf;

/// A file that was relocated
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// An item the operation could not handle, with the reason
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedItem {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of an organize run
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeReport {
    /// Files moved (or, in a dry run, that would be moved)
    pub moved: Vec<MovedFile>,
    /// Files already in their destination folder
    pub unchanged: Vec<PathBuf>,
    pub skipped: Vec<SkippedItem>,
    pub dry_run: bool,
}

impl OrganizeReport {
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub(crate) fn skip(&mut self, path: PathBuf, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(path = %path.display(), %reason, "skipping file");
        self.skipped.push(SkippedItem { path, reason });
    }
}

/// Outcome of an empty-folder cleanup
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<SkippedItem>,
}

impl CleanupReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    pub(crate) fn fail(&mut self, path: PathBuf, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(path = %path.display(), %reason, "folder left in place");
        self.failed.push(SkippedItem { path, reason });
    }
}
