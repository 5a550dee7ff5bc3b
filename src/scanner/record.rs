use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Metadata for one scanned file, read on demand.
///
/// Goes stale as soon as the file is moved, renamed or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified: DateTime<Local>,
    /// Lower-cased with the leading dot (".pdf"), empty when there is none
    pub extension: String,
    pub name: String,
}

impl FileRecord {
    /// Read a record from filesystem metadata
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let meta = std::fs::metadata(path)?;
        let modified = meta.modified()?;
        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: meta.len(),
            modified: DateTime::<Local>::from(modified),
            extension: extension_of(path),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })
    }
}

/// Lower-cased extension including the dot, or an empty string
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("/a/Report.PDF")), ".pdf");
        assert_eq!(extension_of(Path::new("/a/archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("/a/Makefile")), "");
        assert_eq!(extension_of(Path::new("/a/.bashrc")), "");
    }

    #[test]
    fn test_record_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Photo.JPG");
        std::fs::write(&path, b"12345").unwrap();

        let record = FileRecord::from_path(&path).unwrap();
        assert_eq!(record.size_bytes, 5);
        assert_eq!(record.extension, ".jpg");
        assert_eq!(record.name, "Photo.JPG");
    }

    #[test]
    fn test_record_missing_file() {
        assert!(FileRecord::from_path(Path::new("/nonexistent/file.txt")).is_err());
    }
}
