use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::common::errors::NoteError;

/// Titles derived from content keep this many characters
const AUTO_TITLE_CHARS: usize = 30;

/// A free-text note, stored as `<id>.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// One JSON document per note inside a single directory
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    /// Open (and create if needed) a note directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, NoteError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| NoteError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create a note. An empty title is derived from the content.
    pub fn save(&self, content: &str, title: &str) -> Result<Note, NoteError> {
        let now = Utc::now();
        let note = Note {
            id: uuid::Uuid::new_v4().to_string(),
            title: if title.trim().is_empty() {
                auto_title(content)
            } else {
                title.to_string()
            },
            content: content.to_string(),
            created: now,
            modified: now,
        };
        self.write(&note)?;
        tracing::debug!(id = %note.id, "note saved");
        Ok(note)
    }

    /// All readable notes, newest first. Malformed files are skipped.
    pub fn list(&self) -> Vec<Note> {
        let escaped = glob::Pattern::escape(&self.dir.to_string_lossy());
        let pattern = Path::new(&escaped).join("*.json");
        let entries = match glob::glob(&pattern.to_string_lossy()) {
            Ok(paths) => paths,
            Err(e) => {
                tracing::warn!(dir = %self.dir.display(), error = %e, "cannot list notes");
                return Vec::new();
            }
        };

        let mut notes: Vec<Note> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|path| match read_note(&path) {
                Ok(note) => Some(note),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping note");
                    None
                }
            })
            .collect();

        notes.sort_by(|a, b| b.created.cmp(&a.created));
        notes
    }

    /// Fetch one note; `Ok(None)` if it does not exist
    pub fn get(&self, id: &str) -> Result<Option<Note>, NoteError> {
        let path = self.note_path(id)?;
        if !path.exists() {
            return Ok(None);
        }
        read_note(&path).map(Some)
    }

    /// Replace a note's content, and its title when `title` is non-empty.
    /// Returns false if the note does not exist.
    pub fn update(&self, id: &str, content: &str, title: &str) -> Result<bool, NoteError> {
        let Some(mut note) = self.get(id)? else {
            return Ok(false);
        };
        note.content = content.to_string();
        if !title.trim().is_empty() {
            note.title = title.to_string();
        }
        note.modified = Utc::now();
        self.write(&note)?;
        Ok(true)
    }

    /// Delete a note. Returns false if it did not exist.
    pub fn delete(&self, id: &str) -> Result<bool, NoteError> {
        let path = self.note_path(id)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path).map_err(|source| NoteError::Io { path, source })?;
        Ok(true)
    }

    /// Case-insensitive match against title and content
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query = query.to_lowercase();
        self.list()
            .into_iter()
            .filter(|n| n.title.to_lowercase().contains(&query) || n.content.to_lowercase().contains(&query))
            .collect()
    }

    fn note_path(&self, id: &str) -> Result<PathBuf, NoteError> {
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\'])
            && !id.contains('\0');
        if !valid {
            return Err(NoteError::InvalidId { id: id.to_string() });
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    fn write(&self, note: &Note) -> Result<(), NoteError> {
        let path = self.note_path(&note.id)?;
        let json = serde_json::to_string_pretty(note).map_err(|source| NoteError::Malformed {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(|source| NoteError::Io { path, source })
    }
}

fn read_note(path: &Path) -> Result<Note, NoteError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NoteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| NoteError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn auto_title(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(AUTO_TITLE_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
