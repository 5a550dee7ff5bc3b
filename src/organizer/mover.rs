use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::category::categorize;
use super::report::{MovedFile, OrganizeReport};
use crate::common::errors::Result;
use crate::scanner::{validate_root, ScanSnapshot};

/// Move every snapshot file into `root/<Category>/`.
///
/// Each move is independent: a failure (destination taken, cross-device,
/// permission) skips that file and the run continues. Nothing is rolled back.
/// With `dry_run` no folder is created and no file is touched; the report lists
/// what would have moved, with the same skips a real run would hit.
pub fn organize_by_type(snapshot: &ScanSnapshot, root: &Path, dry_run: bool) -> Result<OrganizeReport> {
    let root = validate_root(root)?;
    let mut report = OrganizeReport {
        dry_run,
        ..Default::default()
    };
    let mut planned = HashSet::new();

    for (category, files) in categorize(snapshot) {
        if files.is_empty() {
            continue;
        }

        let target = root.join(category.dir_name());
        if !dry_run {
            if let Err(e) = std::fs::create_dir_all(&target) {
                for file in files {
                    report.skip(file, format!("cannot create '{}': {}", target.display(), e));
                }
                continue;
            }
        }

        for file in files {
            move_into(&mut report, &mut planned, file, &target, dry_run);
        }
    }

    tracing::info!(
        root = %root.display(),
        moved = report.moved_count(),
        skipped = report.skipped_count(),
        dry_run,
        "organized by type"
    );
    Ok(report)
}

/// Move every snapshot file into `root/YYYY/MM/DD/` by modification date
/// (local time). Same best-effort policy as [`organize_by_type`].
pub fn organize_by_date(snapshot: &ScanSnapshot, root: &Path, dry_run: bool) -> Result<OrganizeReport> {
    let root = validate_root(root)?;
    let mut report = OrganizeReport {
        dry_run,
        ..Default::default()
    };
    let mut planned = HashSet::new();

    for file in snapshot.files() {
        let modified = match std::fs::metadata(file).and_then(|m| m.modified()) {
            Ok(t) => DateTime::<Local>::from(t),
            Err(e) => {
                report.skip(file.clone(), format!("cannot read modification time: {}", e));
                continue;
            }
        };

        let target = date_folder(&root, &modified);
        if !dry_run {
            if let Err(e) = std::fs::create_dir_all(&target) {
                report.skip(file.clone(), format!("cannot create '{}': {}", target.display(), e));
                continue;
            }
        }

        move_into(&mut report, &mut planned, file.clone(), &target, dry_run);
    }

    tracing::info!(
        root = %root.display(),
        moved = report.moved_count(),
        skipped = report.skipped_count(),
        dry_run,
        "organized by date"
    );
    Ok(report)
}

/// `root/YYYY/MM/DD` with zero-padded month and day
pub fn date_folder(root: &Path, modified: &DateTime<Local>) -> PathBuf {
    root.join(modified.format("%Y").to_string())
        .join(modified.format("%m").to_string())
        .join(modified.format("%d").to_string())
}

/// `planned` holds destinations claimed earlier in this run. A dry run never
/// creates them on disk, so they count as occupied here.
fn move_into(
    report: &mut OrganizeReport,
    planned: &mut HashSet<PathBuf>,
    file: PathBuf,
    target: &Path,
    dry_run: bool,
) {
    if file.parent() == Some(target) {
        report.unchanged.push(file);
        return;
    }

    let Some(name) = file.file_name() else {
        report.skip(file, "path has no file name");
        return;
    };
    let dest = target.join(name);

    // rename(2) silently replaces an existing file; refuse instead.
    if planned.contains(&dest) || dest.symlink_metadata().is_ok() {
        report.skip(file, format!("destination already exists: {}", dest.display()));
        return;
    }

    if dry_run {
        if let Err(e) = file.symlink_metadata() {
            report.skip(file, format!("move failed: {}", e));
            return;
        }
    } else {
        if let Err(e) = std::fs::rename(&file, &dest) {
            report.skip(file, format!("move failed: {}", e));
            return;
        }
        tracing::debug!(from = %file.display(), to = %dest.display(), "moved");
    }

    planned.insert(dest.clone());
    report.moved.push(MovedFile { from: file, to: dest });
}
