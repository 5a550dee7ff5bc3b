use std::collections::HashSet;
use tempfile::TempDir;

use workspace_organizer::notes::NoteStore;

fn store() -> (TempDir, NoteStore) {
    let dir = TempDir::new().unwrap();
    let store = NoteStore::open(dir.path().join("notes")).unwrap();
    (dir, store)
}

#[test]
fn test_save_and_get() {
    let (_dir, store) = store();
    let note = store.save("Buy milk", "Shopping").unwrap();

    let loaded = store.get(&note.id).unwrap().unwrap();
    assert_eq!(loaded, note);
    assert_eq!(loaded.title, "Shopping");
    assert_eq!(loaded.created, loaded.modified);
    assert!(store.dir().join(format!("{}.json", note.id)).is_file());
}

#[test]
fn test_empty_title_derived_from_content() {
    let (_dir, store) = store();
    let long = "This content is definitely longer than thirty characters";
    let note = store.save(long, "").unwrap();
    assert_eq!(note.title, "This content is definitely lon...");

    let short = store.save("tiny", "").unwrap();
    assert_eq!(short.title, "tiny");
}

#[test]
fn test_ids_do_not_collide_within_a_second() {
    let (_dir, store) = store();
    let ids: HashSet<String> = (0..50).map(|i| store.save(&format!("n{}", i), "").unwrap().id).collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(store.list().len(), 50);
}

#[test]
fn test_list_newest_first_and_skips_malformed() {
    let (_dir, store) = store();
    let first = store.save("first", "").unwrap();
    std::thread::sleep(std::time::Duration::from_millis(10));
    let second = store.save("second", "").unwrap();
    std::fs::write(store.dir().join("broken.json"), "{ nope").unwrap();

    let notes = store.list();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, second.id);
    assert_eq!(notes[1].id, first.id);
}

#[test]
fn test_update() {
    let (_dir, store) = store();
    let note = store.save("draft", "Title").unwrap();

    assert!(store.update(&note.id, "final", "").unwrap());
    let loaded = store.get(&note.id).unwrap().unwrap();
    assert_eq!(loaded.content, "final");
    assert_eq!(loaded.title, "Title");
    assert!(loaded.modified >= loaded.created);

    assert!(store.update(&note.id, "final", "New").unwrap());
    assert_eq!(store.get(&note.id).unwrap().unwrap().title, "New");

    assert!(!store.update("unknown-id", "x", "").unwrap());
}

#[test]
fn test_delete() {
    let (_dir, store) = store();
    let note = store.save("bye", "").unwrap();

    assert!(store.delete(&note.id).unwrap());
    assert!(store.get(&note.id).unwrap().is_none());
    assert!(!store.delete(&note.id).unwrap());
}

#[test]
fn test_search_title_and_content() {
    let (_dir, store) = store();
    store.save("call the BANK tomorrow", "Errands").unwrap();
    store.save("nothing here", "Banking ideas").unwrap();
    store.save("unrelated", "Misc").unwrap();

    assert_eq!(store.search("bank").len(), 2);
    assert_eq!(store.search("ERRANDS").len(), 1);
    assert!(store.search("zebra").is_empty());
}
