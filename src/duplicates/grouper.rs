use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;

use super::hasher;
use crate::organizer::report::SkippedItem;
use crate::scanner::ScanSnapshot;

/// Two or more byte-identical files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    /// Hex SHA-256 of the shared content
    pub hash: String,
    pub size_bytes: u64,
    pub paths: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Bytes reclaimable by keeping one copy
    pub fn wasted_bytes(&self) -> u64 {
        self.size_bytes * (self.paths.len() as u64).saturating_sub(1)
    }
}

/// Complete results from a duplicate search
#[derive(Debug, Clone, Default, Serialize)]
pub struct DupResults {
    /// Groups in first-seen size order, then first-seen hash order
    pub groups: Vec<DuplicateGroup>,
    pub files_considered: usize,
    /// Files left out because they could not be sized or read
    pub skipped: Vec<SkippedItem>,
    pub total_wasted: u64,
    pub duration_secs: f64,
}

impl DupResults {
    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(|g| g.paths.len() - 1).sum()
    }
}

/// Find byte-identical files in an explicit list
pub fn find_duplicates(files: &[PathBuf]) -> DupResults {
    find_duplicates_with_progress(files, false)
}

/// Find byte-identical files among everything a snapshot holds
pub fn find_duplicates_in(snapshot: &ScanSnapshot, show_progress: bool) -> DupResults {
    find_duplicates_with_progress(snapshot.files(), show_progress)
}

/// Run the two-phase pipeline: bucket by size, then hash only buckets of 2+.
///
/// An unreadable copy drops out silently from its group, so a group can
/// under-report its members; such files show up in `skipped`.
pub fn find_duplicates_with_progress(files: &[PathBuf], show_progress: bool) -> DupResults {
    let start = std::time::Instant::now();
    let mut results = DupResults {
        files_considered: files.len(),
        ..Default::default()
    };

    // ── Pass 1: Group by file size ────────────────────────────────────────
    let pb = make_spinner(show_progress, "Pass 1: Grouping by file size...");
    let by_size = hasher::group_by_size(files);
    results.skipped.extend(by_size.skipped);
    let candidates: usize = by_size.groups.iter().map(|(_, v)| v.len()).sum();
    finish_spinner(
        pb,
        &format!("Pass 1: {} candidates in {} size groups", candidates, by_size.groups.len()),
    );

    // ── Pass 2: Full content hash ─────────────────────────────────────────
    let pb = make_progress(show_progress, by_size.groups.len() as u64, "Pass 2: Hashing...");
    for (size, paths) in &by_size.groups {
        let by_hash = hasher::group_by_full_hash(paths);
        results.skipped.extend(by_hash.skipped);
        for (hash, paths) in by_hash.groups {
            results.groups.push(DuplicateGroup {
                hash,
                size_bytes: *size,
                paths,
            });
        }
        if let Some(ref pb) = pb {
            pb.inc(1);
        }
    }
    finish_progress(pb, &format!("Pass 2: {} duplicate groups", results.groups.len()));

    results.total_wasted = results.groups.iter().map(|g| g.wasted_bytes()).sum();
    results.duration_secs = start.elapsed().as_secs_f64();

    tracing::info!(
        files = results.files_considered,
        groups = results.groups.len(),
        skipped = results.skipped.len(),
        "duplicate search complete"
    );
    results
}

// ── Progress helpers ──────────────────────────────────────────────────────────

fn make_spinner(show: bool, msg: &str) -> Option<ProgressBar> {
    if !show {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    Some(pb)
}

fn finish_spinner(pb: Option<ProgressBar>, msg: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(msg.to_string());
    }
}

fn make_progress(show: bool, total: u64, msg: &str) -> Option<ProgressBar> {
    if !show {
        return None;
    }
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("━━░"));
    }
    pb.set_message(msg.to_string());
    Some(pb)
}

fn finish_progress(pb: Option<ProgressBar>, msg: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(msg.to_string());
    }
}
