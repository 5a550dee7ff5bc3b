use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::scanner::record::extension_of;
use crate::scanner::ScanSnapshot;

/// Fixed file categories. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Documents,
    Images,
    Videos,
    Audio,
    Archives,
    Other,
}

const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt", ".xlsx", ".xls", ".ppt", ".pptx"];
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".ico"];
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv"];
const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a"];
const ARCHIVE_EXTENSIONS: &[&str] = &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2"];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Documents,
        Category::Images,
        Category::Videos,
        Category::Audio,
        Category::Archives,
        Category::Other,
    ];

    /// Extensions (lower-case, with dot) that map to this category.
    /// `Other` has none; it catches everything else.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Documents => DOCUMENT_EXTENSIONS,
            Category::Images => IMAGE_EXTENSIONS,
            Category::Videos => VIDEO_EXTENSIONS,
            Category::Audio => AUDIO_EXTENSIONS,
            Category::Archives => ARCHIVE_EXTENSIONS,
            Category::Other => &[],
        }
    }

    /// Classify an extension such as ".PDF" or "pdf"
    pub fn from_extension(ext: &str) -> Category {
        let ext = ext.to_lowercase();
        let ext = if ext.starts_with('.') { ext } else { format!(".{}", ext) };
        Self::ALL
            .into_iter()
            .find(|c| c.extensions().contains(&ext.as_str()))
            .unwrap_or(Category::Other)
    }

    pub fn of_path(path: &Path) -> Category {
        Self::from_extension(&extension_of(path))
    }

    /// Name of the subfolder files of this category are moved into
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Documents => "Documents",
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Files of a listing partitioned by category. Every category is present,
/// possibly with an empty list.
pub type Categorized = BTreeMap<Category, Vec<PathBuf>>;

/// Partition an explicit list of paths, preserving input order per category
pub fn categorize_paths(files: &[PathBuf]) -> Categorized {
    let mut out: Categorized = Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
    for path in files {
        out.entry(Category::of_path(path)).or_default().push(path.clone());
    }
    out
}

/// Partition the files of a snapshot
pub fn categorize(snapshot: &ScanSnapshot) -> Categorized {
    categorize_paths(snapshot.files())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_extension_maps_to_its_category() {
        for category in Category::ALL {
            for ext in category.extensions() {
                assert_eq!(Category::from_extension(ext), category, "{}", ext);
                assert_eq!(Category::from_extension(&ext.to_uppercase()), category);
            }
        }
    }

    #[test]
    fn test_unknown_and_missing_extensions_are_other() {
        assert_eq!(Category::from_extension(".rs"), Category::Other);
        assert_eq!(Category::from_extension(""), Category::Other);
        assert_eq!(Category::of_path(Path::new("/x/Makefile")), Category::Other);
    }

    #[test]
    fn test_extension_without_dot() {
        assert_eq!(Category::from_extension("MP3"), Category::Audio);
    }

    #[test]
    fn test_categorize_paths_is_total() {
        let files = vec![
            PathBuf::from("/r/a.pdf"),
            PathBuf::from("/r/b.JPEG"),
            PathBuf::from("/r/c.mkv"),
            PathBuf::from("/r/d.flac"),
            PathBuf::from("/r/e.7z"),
            PathBuf::from("/r/f.unknown"),
            PathBuf::from("/r/g"),
        ];
        let cats = categorize_paths(&files);

        assert_eq!(cats.len(), 6);
        assert_eq!(cats[&Category::Documents], vec![PathBuf::from("/r/a.pdf")]);
        assert_eq!(cats[&Category::Images], vec![PathBuf::from("/r/b.JPEG")]);
        assert_eq!(cats[&Category::Videos], vec![PathBuf::from("/r/c.mkv")]);
        assert_eq!(cats[&Category::Audio], vec![PathBuf::from("/r/d.flac")]);
        assert_eq!(cats[&Category::Archives], vec![PathBuf::from("/r/e.7z")]);
        assert_eq!(cats[&Category::Other].len(), 2);

        let total: usize = cats.values().map(|v| v.len()).sum();
        assert_eq!(total, files.len());
    }

    #[test]
    fn test_categorize_empty_has_all_keys() {
        let cats = categorize_paths(&[]);
        assert_eq!(cats.keys().copied().collect::<Vec<_>>(), Category::ALL.to_vec());
        assert!(cats.values().all(|v| v.is_empty()));
    }
}
