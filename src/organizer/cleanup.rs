use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::report::CleanupReport;
use crate::common::errors::Result;
use crate::scanner::validate_root;

/// Remove every empty directory below `root` (the root itself is kept).
///
/// The walk is bottom-up, so a parent that only becomes empty once its
/// children are removed goes in the same pass. A directory that cannot be
/// listed or removed is left in place and reported.
pub fn cleanup_empty_folders(root: &Path) -> Result<CleanupReport> {
    let root = validate_root(root)?;
    let mut report = CleanupReport::default();
    // walkdir still yields a deferred directory after its listing error
    let mut unreadable: HashSet<PathBuf> = HashSet::new();

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .min_depth(1)
        .contents_first(true);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                unreadable.insert(path.clone());
                report.fail(path, e.to_string());
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if unreadable.contains(path) {
            continue;
        }
        let is_empty = match std::fs::read_dir(path) {
            Ok(mut entries) => entries.next().is_none(),
            Err(e) => {
                report.fail(path.to_path_buf(), format!("cannot list: {}", e));
                continue;
            }
        };
        if !is_empty {
            continue;
        }

        match std::fs::remove_dir(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed empty folder");
                report.removed.push(path.to_path_buf());
            }
            Err(e) => report.fail(path.to_path_buf(), format!("cannot remove: {}", e)),
        }
    }

    tracing::info!(
        root = %root.display(),
        removed = report.removed_count(),
        failed = report.failed.len(),
        "empty folder cleanup complete"
    );
    Ok(report)
}
