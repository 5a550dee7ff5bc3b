use std::path::PathBuf;

/// Typed errors for engine operations.
/// The binary uses `anyhow` at the top level, but these let the library be
/// precise about what went wrong and where.
#[derive(Debug, thiserror::Error)]
pub enum OrganizerError {
    /// Root path does not exist
    #[error("Path does not exist: '{}'", .path.display())]
    RootNotFound { path: PathBuf },

    /// Root path exists but is not a directory
    #[error("Not a directory: '{}'", .path.display())]
    RootNotDirectory { path: PathBuf },

    /// File system operation failed
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OrganizerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OrganizerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the note store
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    /// Id would escape the notes directory or is empty
    #[error("Invalid note id: '{id}'")]
    InvalidId { id: String },

    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Note file exists but is not valid JSON
    #[error("Malformed note '{}': {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = OrganizerError> = std::result::Result<T, E>;
