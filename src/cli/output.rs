use colored::*;
use serde::Serialize;
use std::path::PathBuf;

use crate::common::config::Config;
use crate::common::format::{self, format_path, format_size, format_size_colored};
use crate::duplicates::DupResults;
use crate::notes::Note;
use crate::organizer::{Categorized, CleanupReport, OrganizeReport, SkippedItem};
use crate::scanner::ScanSnapshot;

/// Print any report as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

fn rule() {
    println!("{}", "─".repeat(60).dimmed());
}

// ─── Scan ─────────────────────────────────────────────────────────────────────

/// Print scan results in human-readable format
pub fn print_scan_results(snapshot: &ScanSnapshot, detailed: bool) {
    println!();
    println!("{}  Scan of {}", "📂", format_path(&snapshot.root).cyan());
    rule();
    println!(
        "  Scanned in {}  •  {}  •  depth {}",
        format::format_duration(snapshot.duration_secs).cyan(),
        format::format_count(snapshot.len()),
        snapshot.max_depth
    );
    rule();

    if detailed {
        println!();
        for path in snapshot.files() {
            println!("    {}", format_path(path));
        }
    }

    print_warnings(&snapshot.errors);
    println!();
}

pub fn print_scan_quiet(snapshot: &ScanSnapshot) {
    for path in snapshot.files() {
        println!("{}", path.display());
    }
}

/// Print a plain list of paths, one per line, under a heading
pub fn print_path_list(title: &str, paths: &[PathBuf]) {
    format::print_header(title);
    if paths.is_empty() {
        println!("  {}", "No files found".dimmed());
    }
    for path in paths {
        println!("  {} {}", "→".dimmed(), format_path(path));
    }
    println!();
}

pub fn print_storage(snapshot: &ScanSnapshot) {
    format::print_header("Storage");
    format::print_kv("Folder", &format_path(&snapshot.root));
    format::print_kv("Files", &snapshot.len().to_string());
    println!("  {}: {}", "Total".dimmed(), format_size_colored(snapshot.total_bytes()));
    println!();
}

// ─── Categories ───────────────────────────────────────────────────────────────

pub fn print_categories(categories: &Categorized, detailed: bool) {
    let total: usize = categories.values().map(|v| v.len()).sum();
    format::print_header("Files by type");

    for (category, files) in categories {
        let fraction = if total == 0 { 0.0 } else { files.len() as f64 / total as f64 };
        let bytes: u64 = files
            .iter()
            .filter_map(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
            .sum();
        println!(
            "  {:<10} {} {:>6}  {}",
            category.to_string().bold(),
            format::progress_bar(fraction, 20),
            files.len(),
            format_size(bytes).dimmed()
        );
        if detailed {
            for path in files {
                println!("      {}", format_path(path).dimmed());
            }
        }
    }
    println!();
}

// ─── Duplicates ───────────────────────────────────────────────────────────────

pub fn print_dup_results(results: &DupResults, detailed: bool) {
    println!();
    println!("{}  Duplicate Files", "🔁");
    rule();
    println!(
        "  {} checked  •  {} groups  •  {} reclaimable  •  {}",
        format::format_count(results.files_considered),
        results.groups.len(),
        format_size_colored(results.total_wasted),
        format::format_duration(results.duration_secs).cyan()
    );
    rule();

    if results.groups.is_empty() {
        println!("  {} No duplicates found", "✨");
    }

    for (i, group) in results.groups.iter().enumerate() {
        println!(
            "  {} {} copies of {} ({} wasted)",
            format!("#{}", i + 1).cyan(),
            group.paths.len(),
            format_size(group.size_bytes),
            format_size(group.wasted_bytes()).yellow()
        );
        if detailed {
            println!("      {}", format::truncate(&group.hash, 16).dimmed());
            for path in &group.paths {
                println!("      {} {}", "→".dimmed(), format_path(path));
            }
        }
    }

    print_skipped(&results.skipped, detailed);
    println!();
}

// ─── Organize / cleanup ───────────────────────────────────────────────────────

pub fn print_organize_report(report: &OrganizeReport, detailed: bool) {
    println!();
    let verb = if report.dry_run { "would be organized" } else { "organized" };
    println!(
        "  {} {} {}",
        "✔".green(),
        format::format_count(report.moved_count()).bold(),
        verb
    );
    if !report.unchanged.is_empty() {
        println!("  {} {} already in place", "•".dimmed(), format::format_count(report.unchanged.len()));
    }

    if detailed {
        for m in &report.moved {
            println!("    {} → {}", format_path(&m.from).dimmed(), format_path(&m.to));
        }
    }

    print_skipped(&report.skipped, detailed);
    println!();
}

pub fn print_cleanup_report(report: &CleanupReport, detailed: bool) {
    println!();
    println!(
        "  {} {} empty folders removed",
        "✔".green(),
        report.removed_count().to_string().bold()
    );
    if detailed {
        for path in &report.removed {
            println!("    {} {}", "→".dimmed(), format_path(path).dimmed());
        }
    }
    print_skipped(&report.failed, detailed);
    println!();
}

fn print_skipped(skipped: &[SkippedItem], detailed: bool) {
    if skipped.is_empty() {
        return;
    }
    println!(
        "  {} {}",
        "⚠".yellow(),
        format!("{} skipped", skipped.len()).yellow()
    );
    if detailed {
        for item in skipped {
            println!("    {} {}: {}", "→".dimmed(), format_path(&item.path), item.reason.dimmed());
        }
    }
}

fn print_warnings(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!(
        "  {} {}",
        "⚠".yellow(),
        format!("{} warnings:", errors.len()).yellow()
    );
    for error in errors {
        println!("    {} {}", "→".dimmed(), error.dimmed());
    }
}

// ─── Config ───────────────────────────────────────────────────────────────────

pub fn print_config(config: &Config, path: &std::path::Path) {
    format::print_header("Configuration");
    format::print_kv("File", &format_path(path));
    format::print_kv("Scan depth", &config.scan_depth.to_string());
    format::print_kv("Recent limit", &config.recent_limit.to_string());
    if config.watched_folders.is_empty() {
        format::print_kv("Watched folders", "none");
    } else {
        format::print_kv("Watched folders", "");
        for folder in &config.watched_folders {
            println!("    {} {}", "→".dimmed(), format_path(folder));
        }
    }
    println!();
}

// ─── Notes ────────────────────────────────────────────────────────────────────

pub fn print_note_list(notes: &[Note]) {
    if notes.is_empty() {
        println!("  {}", "No notes".dimmed());
        return;
    }
    for note in notes {
        println!(
            "  {}  {}  {}",
            note.id.dimmed(),
            note.created.format("%Y-%m-%d %H:%M").to_string().cyan(),
            format::truncate(&note.title, 40)
        );
    }
}

pub fn print_note(note: &Note) {
    format::print_header(&note.title);
    println!("{}", note.content);
    println!();
    format::print_kv("Id", &note.id);
    format::print_kv("Created", &note.created.to_rfc3339());
    format::print_kv("Modified", &note.modified.to_rfc3339());
}
