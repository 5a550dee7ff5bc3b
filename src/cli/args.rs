use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::common::config::DATA_DIR_ENV;

/// Workspace Organizer: scan, sort and tidy a folder tree
#[derive(Parser, Debug)]
#[command(
    name = "workspace-organizer",
    version,
    about = "Scan, categorize, deduplicate and reorganize a folder tree",
    long_about = "Workspace Organizer scans a folder, classifies files by type, finds\n\
                   duplicates, moves files into category or date folders and removes\n\
                   empty folders.",
    after_help = "EXAMPLES:\n  \
        workspace-organizer scan ~/Downloads                 List files (depth 3)\n  \
        workspace-organizer categorize ~/Downloads           Count files per category\n  \
        workspace-organizer dup ~/Pictures --detailed        Show duplicate groups\n  \
        workspace-organizer organize ~/Downloads --by type   Move into category folders\n  \
        workspace-organizer organize ~/Inbox --by date -n    Preview date folders\n  \
        workspace-organizer cleanup ~/Downloads              Remove empty folders\n  \
        workspace-organizer notes add \"call the bank\"        Save a note"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode, minimal output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Directory holding config, notes and logs
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List files under a folder
    Scan {
        path: PathBuf,

        /// Maximum folder depth below the root (0 = root only)
        #[arg(long, short)]
        depth: Option<usize>,

        /// Show every file
        #[arg(long)]
        detailed: bool,
    },

    /// Show the most recently modified files
    Recent {
        path: PathBuf,

        #[arg(long, short)]
        limit: Option<usize>,

        #[arg(long, short)]
        depth: Option<usize>,
    },

    /// Show total size of the files under a folder
    Storage {
        path: PathBuf,

        #[arg(long, short)]
        depth: Option<usize>,
    },

    /// Find files whose name contains a string (case-insensitive)
    Search {
        path: PathBuf,
        query: String,

        #[arg(long, short)]
        depth: Option<usize>,
    },

    /// Group files by type
    Categorize {
        path: PathBuf,

        #[arg(long, short)]
        depth: Option<usize>,

        /// List the files in each category
        #[arg(long)]
        detailed: bool,
    },

    /// Find byte-identical files
    Dup {
        path: PathBuf,

        #[arg(long, short)]
        depth: Option<usize>,

        /// Show individual files in each group
        #[arg(long)]
        detailed: bool,
    },

    /// Move files into category or date folders
    Organize {
        path: PathBuf,

        /// Folder layout to produce
        #[arg(long, value_enum, default_value = "type")]
        by: OrganizeBy,

        #[arg(long, short)]
        depth: Option<usize>,

        /// Only show what would move
        #[arg(long, short = 'n')]
        dry_run: bool,

        /// List every move and skip
        #[arg(long)]
        detailed: bool,
    },

    /// Remove empty folders
    Cleanup { path: PathBuf },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the config file location
    Path,

    /// Create data directories and a default config
    Init,

    /// Reset to default configuration
    Reset,

    /// Add a watched folder
    Add { folder: PathBuf },

    /// Remove a watched folder
    Remove { folder: PathBuf },
}

#[derive(Subcommand, Debug)]
pub enum NotesAction {
    /// Save a new note
    Add {
        content: String,

        /// Title (defaults to the start of the content)
        #[arg(long, short, default_value = "")]
        title: String,
    },

    /// List notes, newest first
    List,

    /// Show one note
    Show { id: String },

    /// Replace a note's content
    Edit {
        id: String,
        content: String,

        #[arg(long, short, default_value = "")]
        title: String,
    },

    /// Delete a note
    Delete { id: String },

    /// Search titles and content
    Search { query: String },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrganizeBy {
    Type,
    Date,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
