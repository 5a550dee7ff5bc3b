use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

use workspace_organizer::cli::args::{
    Cli, Commands, CompletionShell, ConfigAction, NotesAction, OrganizeBy, OutputFormat,
};
use workspace_organizer::cli::output;
use workspace_organizer::common::config::Config;
use workspace_organizer::common::logging;
use workspace_organizer::duplicates;
use workspace_organizer::notes::NoteStore;
use workspace_organizer::organizer;
use workspace_organizer::scanner::{self, ScanSnapshot};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(Config::data_dir);
    let _log_guard = logging::init(cli.verbose, &data_dir);
    let config = Config::load_from(&Config::config_path_in(&data_dir));

    match cli.command {
        Commands::Scan {
            ref path,
            depth,
            detailed,
        } => {
            let snapshot = scan(path, depth, &config)?;
            match cli.format {
                OutputFormat::Human if !cli.quiet => output::print_scan_results(&snapshot, detailed),
                OutputFormat::Json => output::print_json(&snapshot),
                _ => output::print_scan_quiet(&snapshot),
            }
            Ok(())
        }

        Commands::Recent {
            ref path,
            limit,
            depth,
        } => {
            let snapshot = scan(path, depth, &config)?;
            let recent = snapshot.recent_files(limit.unwrap_or(config.recent_limit));
            print_paths(&cli, "Recently modified", &recent);
            Ok(())
        }

        Commands::Storage { ref path, depth } => {
            let snapshot = scan(path, depth, &config)?;
            match cli.format {
                OutputFormat::Human if !cli.quiet => output::print_storage(&snapshot),
                OutputFormat::Json => output::print_json(&serde_json::json!({
                    "root": &snapshot.root,
                    "files": snapshot.len(),
                    "total_bytes": snapshot.total_bytes(),
                    "total": snapshot.total_storage(),
                })),
                _ => println!("{}", snapshot.total_storage()),
            }
            Ok(())
        }

        Commands::Search {
            ref path,
            ref query,
            depth,
        } => {
            let snapshot = scan(path, depth, &config)?;
            let found = snapshot.search(query);
            print_paths(&cli, &format!("Matches for \"{}\"", query), &found);
            Ok(())
        }

        Commands::Categorize {
            ref path,
            depth,
            detailed,
        } => {
            let snapshot = scan(path, depth, &config)?;
            let categories = organizer::categorize(&snapshot);
            match cli.format {
                OutputFormat::Json => output::print_json(&categories),
                OutputFormat::Quiet => {
                    for (category, files) in &categories {
                        println!("{}\t{}", category, files.len());
                    }
                }
                OutputFormat::Human => output::print_categories(&categories, detailed),
            }
            Ok(())
        }

        Commands::Dup {
            ref path,
            depth,
            detailed,
        } => {
            let snapshot = scan(path, depth, &config)?;
            let show_progress = !cli.quiet && matches!(cli.format, OutputFormat::Human);
            let results = duplicates::find_duplicates_in(&snapshot, show_progress);
            match cli.format {
                OutputFormat::Human => output::print_dup_results(&results, detailed || cli.verbose),
                OutputFormat::Json => output::print_json(&results),
                OutputFormat::Quiet => {
                    for group in &results.groups {
                        let paths: Vec<String> = group.paths.iter().map(|p| p.display().to_string()).collect();
                        println!("{}", paths.join("\t"));
                    }
                }
            }
            Ok(())
        }

        Commands::Organize {
            ref path,
            by,
            depth,
            dry_run,
            detailed,
        } => cmd_organize(&cli, path, by, depth, dry_run, detailed, &config),

        Commands::Cleanup { ref path } => {
            let report = organizer::cleanup_empty_folders(path)?;
            match cli.format {
                OutputFormat::Human if !cli.quiet => output::print_cleanup_report(&report, cli.verbose),
                OutputFormat::Json => output::print_json(&report),
                _ => println!("{}", report.removed_count()),
            }
            Ok(())
        }

        Commands::Config { ref action } => cmd_config(action, &data_dir, config),

        Commands::Notes { ref action } => cmd_notes(&cli, action, &data_dir),

        Commands::Completions { ref shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "workspace-organizer", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn scan(path: &Path, depth: Option<usize>, config: &Config) -> Result<ScanSnapshot> {
    let depth = depth.unwrap_or(config.scan_depth);
    scanner::scan(path, depth).with_context(|| format!("Cannot scan {}", path.display()))
}

fn print_paths(cli: &Cli, title: &str, paths: &[PathBuf]) {
    match cli.format {
        OutputFormat::Human if !cli.quiet => output::print_path_list(title, paths),
        OutputFormat::Json => output::print_json(paths),
        _ => {
            for path in paths {
                println!("{}", path.display());
            }
        }
    }
}

// ─── Organize ─────────────────────────────────────────────────────────────────

fn cmd_organize(
    cli: &Cli,
    path: &Path,
    by: OrganizeBy,
    depth: Option<usize>,
    dry_run: bool,
    detailed: bool,
    config: &Config,
) -> Result<()> {
    let snapshot = scan(path, depth, config)?;

    let report = match by {
        OrganizeBy::Type => organizer::organize_by_type(&snapshot, path, dry_run)?,
        OrganizeBy::Date => organizer::organize_by_date(&snapshot, path, dry_run)?,
    };

    match cli.format {
        OutputFormat::Human if !cli.quiet => {
            output::print_organize_report(&report, detailed || cli.verbose || dry_run)
        }
        OutputFormat::Json => output::print_json(&report),
        _ => println!("{}", report.moved_count()),
    }
    Ok(())
}

// ─── Config ───────────────────────────────────────────────────────────────────

fn cmd_config(action: &ConfigAction, data_dir: &Path, mut config: Config) -> Result<()> {
    let path = Config::config_path_in(data_dir);

    match action {
        ConfigAction::Show => output::print_config(&config, &path),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init => {
            Config::init_dirs(data_dir)?;
            if !path.exists() {
                Config::default().save_to(&path)?;
            }
            println!("  {} Initialized {}", "✔".green(), data_dir.display());
        }
        ConfigAction::Reset => {
            Config::default().save_to(&path)?;
            println!("  {} Configuration reset to defaults", "✔".green());
        }
        ConfigAction::Add { folder } => {
            let folder = scanner::validate_root(folder)
                .with_context(|| format!("Cannot watch {}", folder.display()))?;
            if config.add_watched_folder(folder.clone()) {
                config.save_to(&path)?;
                println!("  {} Watching {}", "✔".green(), folder.display());
            } else {
                println!("  {} Already watching {}", "•".dimmed(), folder.display());
            }
        }
        ConfigAction::Remove { folder } => {
            let canonical = folder.canonicalize().unwrap_or_else(|_| folder.clone());
            if config.remove_watched_folder(&canonical) || config.remove_watched_folder(folder) {
                config.save_to(&path)?;
                println!("  {} No longer watching {}", "✔".green(), folder.display());
            } else {
                anyhow::bail!("Not a watched folder: {}", folder.display());
            }
        }
    }
    Ok(())
}

// ─── Notes ────────────────────────────────────────────────────────────────────

fn cmd_notes(cli: &Cli, action: &NotesAction, data_dir: &Path) -> Result<()> {
    let store = NoteStore::open(Config::notes_dir_in(data_dir))?;
    let json = matches!(cli.format, OutputFormat::Json);

    match action {
        NotesAction::Add { content, title } => {
            let note = store.save(content, title)?;
            if json {
                output::print_json(&note);
            } else {
                println!("{}", note.id);
            }
        }
        NotesAction::List => {
            let notes = store.list();
            if json {
                output::print_json(&notes);
            } else {
                output::print_note_list(&notes);
            }
        }
        NotesAction::Show { id } => {
            let note = store
                .get(id)?
                .with_context(|| format!("Note '{}' not found", id))?;
            if json {
                output::print_json(&note);
            } else {
                output::print_note(&note);
            }
        }
        NotesAction::Edit { id, content, title } => {
            if !store.update(id, content, title)? {
                anyhow::bail!("Note '{}' not found", id);
            }
            if !cli.quiet {
                println!("  {} Updated {}", "✔".green(), id);
            }
        }
        NotesAction::Delete { id } => {
            if !store.delete(id)? {
                anyhow::bail!("Note '{}' not found", id);
            }
            if !cli.quiet {
                println!("  {} Deleted {}", "✔".green(), id);
            }
        }
        NotesAction::Search { query } => {
            let notes = store.search(query);
            if json {
                output::print_json(&notes);
            } else {
                output::print_note_list(&notes);
            }
        }
    }
    Ok(())
}
