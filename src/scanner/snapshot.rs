use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::record::FileRecord;
use crate::common::format;

/// Immutable result of one scan of one root.
///
/// Only [`crate::scanner::scan`] produces snapshots. Queries never touch the
/// filesystem listing again, so after any move or delete callers re-scan to get
/// a fresh snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSnapshot {
    /// Canonical root that was scanned
    pub root: PathBuf,
    pub max_depth: usize,
    /// Files in traversal order
    pub files: Vec<PathBuf>,
    /// Subtrees that could not be read
    pub errors: Vec<String>,
    pub scanned_at: DateTime<Utc>,
    pub duration_secs: f64,
}

impl ScanSnapshot {
    /// Build a snapshot from an explicit file list (no walk)
    pub fn from_files(root: impl Into<PathBuf>, files: Vec<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: 0,
            files,
            errors: Vec::new(),
            scanned_at: Utc::now(),
            duration_secs: 0.0,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Fresh metadata for every file that can still be read
    pub fn records(&self) -> Vec<FileRecord> {
        self.files
            .iter()
            .filter_map(|p| match FileRecord::from_path(p) {
                Ok(r) => Some(r),
                Err(e) => {
                    tracing::debug!(path = %p.display(), error = %e, "no metadata");
                    None
                }
            })
            .collect()
    }

    /// The `limit` most recently modified files, newest first.
    ///
    /// If any file's modification time cannot be read, falls back to the
    /// first `limit` files in scan order.
    pub fn recent_files(&self, limit: usize) -> Vec<PathBuf> {
        let mut timed: Vec<(SystemTime, &PathBuf)> = Vec::with_capacity(self.files.len());
        for path in &self.files {
            match std::fs::metadata(path).and_then(|m| m.modified()) {
                Ok(t) => timed.push((t, path)),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "recent files fall back to scan order");
                    return self.files.iter().take(limit).cloned().collect();
                }
            }
        }

        timed.sort_by(|a, b| b.0.cmp(&a.0));
        timed.into_iter().take(limit).map(|(_, p)| p.clone()).collect()
    }

    /// Sum of sizes of files that still exist
    pub fn total_bytes(&self) -> u64 {
        self.files
            .iter()
            .filter_map(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .sum()
    }

    /// Human-readable total size, one decimal place ("0 B" for an empty snapshot)
    pub fn total_storage(&self) -> String {
        if self.files.is_empty() {
            return "0 B".to_string();
        }
        format::format_size(self.total_bytes())
    }

    /// Case-insensitive substring match against file names
    pub fn search(&self, query: &str) -> Vec<PathBuf> {
        let query = query.to_lowercase();
        self.files
            .iter()
            .filter(|p| name_matches(p, &query))
            .cloned()
            .collect()
    }
}

fn name_matches(path: &Path, lowered_query: &str) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().contains(lowered_query))
        .unwrap_or(false)
}
