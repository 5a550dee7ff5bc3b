use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::organizer::report::SkippedItem;

const READ_BUFFER_SIZE: usize = 1024 * 1024;

/// Buckets in first-seen order, plus the files that could not be examined
#[derive(Debug, Clone)]
pub struct Buckets<K> {
    pub groups: Vec<(K, Vec<PathBuf>)>,
    pub skipped: Vec<SkippedItem>,
}

impl<K> Default for Buckets<K> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Buckets<K> {
    fn collect<I, F>(files: I, mut key_of: F) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
        F: FnMut(&Path) -> std::io::Result<K>,
    {
        let mut out = Self::default();
        let mut index: HashMap<K, usize> = HashMap::new();

        for path in files {
            match key_of(&path) {
                Ok(key) => match index.get(&key) {
                    Some(&i) => out.groups[i].1.push(path),
                    None => {
                        index.insert(key.clone(), out.groups.len());
                        out.groups.push((key, vec![path]));
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    out.skipped.push(SkippedItem {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Only buckets with 2+ files can hold duplicates
        out.groups.retain(|(_, v)| v.len() > 1);
        out
    }
}

/// Compute full SHA-256 hash of a file, hex encoded
pub fn full_hash(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut hasher = Sha256::new();

    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Phase 1: group paths by byte size.
/// Files with a unique size cannot be duplicates and are dropped here;
/// files whose metadata cannot be read (or that are not regular files) are skipped.
pub fn group_by_size(files: &[PathBuf]) -> Buckets<u64> {
    Buckets::collect(files.iter().cloned(), |path| {
        let meta = std::fs::metadata(path)?;
        if meta.is_file() {
            Ok(meta.len())
        } else {
            Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"))
        }
    })
}

/// Phase 2: group same-size paths by full content hash.
/// Singleton hash buckets are false positives and are dropped.
pub fn group_by_full_hash(files: &[PathBuf]) -> Buckets<String> {
    Buckets::collect(files.iter().cloned(), full_hash)
}
