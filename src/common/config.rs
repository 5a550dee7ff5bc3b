use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "WORKSPACE_ORGANIZER_HOME";

/// Persisted organizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folders the user wants to re-scan regularly
    #[serde(default)]
    pub watched_folders: Vec<PathBuf>,

    /// Default scan depth below the root
    #[serde(default = "default_scan_depth")]
    pub scan_depth: usize,

    /// Default number of entries for the recent-files listing
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_scan_depth() -> usize {
    3
}
fn default_recent_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watched_folders: Vec::new(),
            scan_depth: default_scan_depth(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Get the data directory (~/.workspace_organizer)
    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".workspace_organizer")
    }

    /// Config file inside a data directory
    pub fn config_path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.json")
    }

    /// Notes directory inside a data directory
    pub fn notes_dir_in(data_dir: &Path) -> PathBuf {
        data_dir.join("notes")
    }

    /// Logs directory inside a data directory
    pub fn logs_dir_in(data_dir: &Path) -> PathBuf {
        data_dir.join("logs")
    }

    /// Load config from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::config_path_in(&Self::data_dir()))
    }

    /// Load config from a file. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Config::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                return Config::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Config::default()
            }
        }
    }

    /// Save config to a file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config dir: {}", dir.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Create the data, notes and logs directories
    pub fn init_dirs(data_dir: &Path) -> Result<()> {
        let dirs = [
            data_dir.to_path_buf(),
            Self::notes_dir_in(data_dir),
            Self::logs_dir_in(data_dir),
        ];
        for dir in &dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Add a watched folder. Returns false if it was already present.
    pub fn add_watched_folder(&mut self, folder: impl Into<PathBuf>) -> bool {
        let folder = folder.into();
        if self.watched_folders.contains(&folder) {
            return false;
        }
        self.watched_folders.push(folder);
        true
    }

    /// Remove a watched folder. Returns false if it was not present.
    pub fn remove_watched_folder(&mut self, folder: &Path) -> bool {
        let before = self.watched_folders.len();
        self.watched_folders.retain(|f| f != folder);
        self.watched_folders.len() != before
    }
}
