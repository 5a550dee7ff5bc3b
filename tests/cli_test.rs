use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with an isolated data directory
fn organizer(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("workspace-organizer").unwrap();
    cmd.env("WORKSPACE_ORGANIZER_HOME", data.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("report.pdf"), "report").unwrap();
    std::fs::write(dir.path().join("photo.jpg"), "photo!").unwrap();
    std::fs::write(dir.path().join("copy.jpg"), "photo!").unwrap();
    std::fs::create_dir_all(dir.path().join("empty/inner")).unwrap();
    dir
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let data = TempDir::new().unwrap();
    organizer(&data)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("organize"))
        .stdout(predicate::str::contains("dup"))
        .stdout(predicate::str::contains("cleanup"))
        .stdout(predicate::str::contains("notes"));
}

#[test]
fn test_version_flag() {
    let data = TempDir::new().unwrap();
    organizer(&data)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace-organizer"));
}

// ─── Engine commands ─────────────────────────────────────────────────────────

#[test]
fn test_scan_json_output() {
    let data = TempDir::new().unwrap();
    let ws = workspace();
    organizer(&data)
        .args(["--format", "json", "scan"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files\""))
        .stdout(predicate::str::contains("report.pdf"));
}

#[test]
fn test_scan_missing_path_fails() {
    let data = TempDir::new().unwrap();
    organizer(&data)
        .args(["scan", "/nonexistent/path/xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_search_quiet() {
    let data = TempDir::new().unwrap();
    let ws = workspace();
    organizer(&data)
        .args(["--format", "quiet", "search"])
        .arg(ws.path())
        .arg("REPORT")
        .assert()
        .success()
        .stdout(predicate::str::contains("report.pdf"))
        .stdout(predicate::str::contains("photo.jpg").not());
}

#[test]
fn test_storage_quiet() {
    let data = TempDir::new().unwrap();
    let ws = workspace();
    organizer(&data)
        .args(["--format", "quiet", "storage"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("18.0 B\n");
}

#[test]
fn test_dup_json() {
    let data = TempDir::new().unwrap();
    let ws = workspace();
    organizer(&data)
        .args(["--format", "json", "dup"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("copy.jpg"))
        .stdout(predicate::str::contains("\"total_wasted\": 6"));
}

#[test]
fn test_organize_then_cleanup() {
    let data = TempDir::new().unwrap();
    let ws = workspace();

    organizer(&data)
        .args(["--format", "quiet", "organize"])
        .arg(ws.path())
        .args(["--by", "type"])
        .assert()
        .success()
        .stdout("3\n");
    assert!(ws.path().join("Documents/report.pdf").exists());
    assert!(ws.path().join("Images/photo.jpg").exists());

    organizer(&data)
        .args(["--format", "quiet", "cleanup"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("2\n");
    assert!(!ws.path().join("empty").exists());
}

#[test]
fn test_quiet_flag_overrides_human_format() {
    let data = TempDir::new().unwrap();
    let ws = workspace();

    organizer(&data)
        .args(["-q", "organize"])
        .arg(ws.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout("3\n");

    organizer(&data)
        .args(["-q", "cleanup"])
        .arg(ws.path())
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_organize_dry_run_keeps_files() {
    let data = TempDir::new().unwrap();
    let ws = workspace();
    organizer(&data)
        .arg("organize")
        .arg(ws.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would be organized"));
    assert!(ws.path().join("report.pdf").exists());
}

// ─── Config & notes ──────────────────────────────────────────────────────────

#[test]
fn test_config_add_and_show() {
    let data = TempDir::new().unwrap();
    let ws = workspace();

    organizer(&data).args(["config", "add"]).arg(ws.path()).assert().success();
    let saved = std::fs::read_to_string(data.path().join("config.json")).unwrap();
    assert!(saved.contains("watched_folders"));

    organizer(&data)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Watched folders"));
}

#[test]
fn test_notes_roundtrip_through_cli() {
    let data = TempDir::new().unwrap();

    let out = organizer(&data)
        .args(["notes", "add", "remember the milk", "--title", "Groceries"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(out).unwrap().trim().to_string();
    assert!(!id.is_empty());

    organizer(&data)
        .args(["notes", "search", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));

    organizer(&data).args(["notes", "delete", id.as_str()]).assert().success();
    organizer(&data).args(["notes", "show", id.as_str()]).assert().failure();
}
