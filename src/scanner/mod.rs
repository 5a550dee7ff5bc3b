pub mod record;
pub mod snapshot;
pub mod walker;

use chrono::Utc;
use std::path::Path;
use std::time::Instant;

use crate::common::errors::Result;

pub use record::FileRecord;
pub use snapshot::ScanSnapshot;
pub use walker::validate_root;

/// Default recursion limit below the root
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Scan `root` and produce a new snapshot.
///
/// Fails only when the root itself is missing or not a directory. Unreadable
/// subtrees are skipped and listed in [`ScanSnapshot::errors`].
pub fn scan(root: &Path, max_depth: usize) -> Result<ScanSnapshot> {
    let start = Instant::now();
    let root = validate_root(root)?;

    let walked = walker::walk_files(&root, max_depth);
    tracing::info!(
        root = %root.display(),
        max_depth,
        files = walked.files.len(),
        errors = walked.errors.len(),
        "scan complete"
    );

    Ok(ScanSnapshot {
        root,
        max_depth,
        files: walked.files,
        errors: walked.errors,
        scanned_at: Utc::now(),
        duration_secs: start.elapsed().as_secs_f64(),
    })
}
