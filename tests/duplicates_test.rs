use std::path::PathBuf;
use tempfile::TempDir;

use workspace_organizer::duplicates::{self, hasher};
use workspace_organizer::scanner;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_full_hash_identical_files() {
    let dir = TempDir::new().unwrap();
    let content: Vec<u8> = (0..8192).map(|i| (i % 256) as u8).collect();
    let a = write(&dir, "a.bin", &content);
    let b = write(&dir, "b.bin", &content);

    assert_eq!(hasher::full_hash(&a).unwrap(), hasher::full_hash(&b).unwrap());
}

#[test]
fn test_full_hash_detects_late_difference() {
    let dir = TempDir::new().unwrap();
    let mut content1 = vec![0u8; 3 * 1024 * 1024];
    let content2 = content1.clone();
    content1[2 * 1024 * 1024 + 7] = 0xFF;
    let a = write(&dir, "a.bin", &content1);
    let b = write(&dir, "b.bin", &content2);

    assert_ne!(hasher::full_hash(&a).unwrap(), hasher::full_hash(&b).unwrap());
}

#[test]
fn test_hash_nonexistent_file() {
    assert!(hasher::full_hash(std::path::Path::new("/nonexistent/file.txt")).is_err());
}

#[test]
fn test_empty_file_hash() {
    let dir = TempDir::new().unwrap();
    let empty = write(&dir, "empty.txt", b"");
    assert_eq!(
        hasher::full_hash(&empty).unwrap(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_one_group_for_equal_content() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"xxxxxxxxxx");
    let b = write(&dir, "b.txt", b"xxxxxxxxxx");
    let c = write(&dir, "c.txt", b"yyyyyyyyyy");

    let results = duplicates::find_duplicates(&[a.clone(), b.clone(), c.clone()]);

    assert_eq!(results.groups.len(), 1);
    let group = &results.groups[0];
    assert_eq!(group.paths, vec![a, b]);
    assert!(!group.paths.contains(&c));
    assert_eq!(group.size_bytes, 10);
    assert_eq!(group.wasted_bytes(), 10);
    assert_eq!(results.total_wasted, 10);
    assert_eq!(results.duplicate_count(), 1);
}

#[test]
fn test_no_groups_when_sizes_differ() {
    let dir = TempDir::new().unwrap();
    let files = vec![
        write(&dir, "a.txt", b"a"),
        write(&dir, "b.txt", b"bb"),
        write(&dir, "c.txt", b"ccc"),
    ];

    let results = duplicates::find_duplicates(&files);
    assert!(results.groups.is_empty());
    assert_eq!(results.files_considered, 3);
}

#[test]
fn test_groups_follow_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let big1 = write(&dir, "big1", b"0123456789");
    let small1 = write(&dir, "small1", b"ab");
    let big2 = write(&dir, "big2", b"0123456789");
    let small2 = write(&dir, "small2", b"ab");
    let other = write(&dir, "small3", b"cd");
    let other2 = write(&dir, "small4", b"cd");

    let results = duplicates::find_duplicates(&[
        big1.clone(),
        small1.clone(),
        big2.clone(),
        small2.clone(),
        other.clone(),
        other2.clone(),
    ]);

    let groups: Vec<Vec<PathBuf>> = results.groups.iter().map(|g| g.paths.clone()).collect();
    assert_eq!(groups, vec![vec![big1, big2], vec![small1, small2], vec![other, other2]]);
}

#[test]
fn test_unreadable_files_are_excluded_and_reported() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"same");
    let b = write(&dir, "b.txt", b"same");
    let missing = dir.path().join("gone.txt");

    let results = duplicates::find_duplicates(&[a.clone(), missing.clone(), b.clone()]);
    assert_eq!(results.groups.len(), 1);
    assert_eq!(results.groups[0].paths, vec![a, b]);
    assert_eq!(results.skipped.len(), 1);
    assert_eq!(results.skipped[0].path, missing);
}

#[test]
fn test_group_members_share_size_and_hash() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    write(&dir, "one.dat", b"payload");
    write(&dir, "sub/two.dat", b"payload");
    write(&dir, "sub/three.dat", b"payload");
    write(&dir, "diff.dat", b"payloaX");

    let root = dir.path().canonicalize().unwrap();
    let snap = scanner::scan(&root, 3).unwrap();
    let results = duplicates::find_duplicates_in(&snap, false);

    assert_eq!(results.groups.len(), 1);
    let group = &results.groups[0];
    assert_eq!(group.paths.len(), 3);
    for path in &group.paths {
        assert_eq!(std::fs::metadata(path).unwrap().len(), group.size_bytes);
        assert_eq!(hasher::full_hash(path).unwrap(), group.hash);
    }
}
