use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::common::errors::{OrganizerError, Result};

/// Files collected by one walk plus the subtrees that could not be read
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub files: Vec<PathBuf>,
    pub errors: Vec<String>,
}

/// Check that `root` is an existing directory and return its canonical form.
///
/// Every entry point that touches the filesystem runs this first so that a
/// bad root is rejected before any work begins.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(OrganizerError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(OrganizerError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    root.canonicalize()
        .map_err(|e| OrganizerError::io(root, e))
}

/// Walk `root` and collect every regular file whose directory lies at most
/// `max_depth` levels below it (0 = only the root's own files).
///
/// Directories deeper than the limit are never opened. Unreadable subtrees are
/// recorded in `errors` and skipped; the walk carries on with the rest.
pub fn walk_files(root: &Path, max_depth: usize) -> WalkOutput {
    let mut out = WalkOutput::default();

    // walkdir counts the root as depth 0 and its direct children as depth 1,
    // so a file inside a directory at depth d is yielded at d + 1.
    let walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .max_depth(max_depth.saturating_add(1))
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let location = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                tracing::warn!(path = %location, error = %e, "skipping unreadable entry");
                out.errors.push(format!("Skipped '{}': {}", location, e));
                continue;
            }
        };

        if entry.file_type().is_file() {
            out.files.push(entry.into_path());
        }
    }

    out
}
