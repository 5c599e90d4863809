//! Integration tests for export, import and loading existing data files

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::passbook_cmd;

const EXISTING: &str = r#"{
  "x": {
    "name": "X",
    "username": "u1",
    "password": "p1"
  }
}"#;

#[test]
fn test_export_default_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), EXISTING).unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported to passwords_export.txt"));

    let report = fs::read_to_string(temp.path().join("passwords_export.txt")).unwrap();
    assert!(report.starts_with("Password Manager Export\n"));
    assert!(report.contains(&"=".repeat(50)));
    assert!(report.contains("1. Service: X\n   Username: u1\n   Password: p1\n"));
}

#[test]
fn test_export_does_not_touch_data_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), EXISTING).unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .args(["export", "out.txt"])
        .assert()
        .success();

    assert!(temp.path().join("out.txt").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("passwords.json")).unwrap(),
        EXISTING
    );
}

#[test]
fn test_import_merges_with_import_winning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), EXISTING).unwrap();
    fs::write(
        temp.path().join("incoming.json"),
        r#"{
            "x": {"name": "X", "username": "u2", "password": "p2"},
            "y": {"name": "Y", "username": "u3", "password": "p3"}
        }"#,
    )
    .unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .args(["import", "incoming.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully imported 2 entries from incoming.json",
        ));

    passbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 entries)"))
        .stdout(predicate::str::contains("Username: u2"))
        .stdout(predicate::str::contains("Username: u1").not())
        .stdout(predicate::str::contains("Name: Y"));
}

#[test]
fn test_import_malformed_changes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), EXISTING).unwrap();
    fs::write(temp.path().join("broken.json"), "{\"y\": {\"name\": \"Y\"").unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .args(["import", "broken.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Import failed"))
        .stderr(predicate::str::contains("Nothing was changed"));

    assert_eq!(
        fs::read_to_string(temp.path().join("passwords.json")).unwrap(),
        EXISTING
    );
}

#[test]
fn test_import_missing_file() {
    let temp = TempDir::new().unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .args(["import", "nowhere.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!temp.path().join("passwords.json").exists());
}

#[test]
fn test_corrupt_data_file_starts_fresh_with_warning() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), "definitely not json").unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No passwords stored."))
        .stderr(predicate::str::contains("starting with an empty store"));

    // Reading alone does not overwrite the corrupt file
    assert_eq!(
        fs::read_to_string(temp.path().join("passwords.json")).unwrap(),
        "definitely not json"
    );
}

#[test]
fn test_missing_data_file_is_silent() {
    let temp = TempDir::new().unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_menu_session_reports_load_status() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), EXISTING).unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .write_stdin("2\nx\n1\nBank\nbob\npw\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 entries from passwords.json"))
        .stdout(predicate::str::contains("Found entry for 'X':"))
        .stdout(predicate::str::contains("Password for 'Bank' added successfully!"))
        .stdout(predicate::str::contains("Goodbye!"));

    let content = fs::read_to_string(temp.path().join("passwords.json")).unwrap();
    assert!(content.contains("\"bank\""));
}

#[test]
fn test_menu_session_on_corrupt_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("passwords.json"), "[1, 2").unwrap();

    passbook_cmd()
        .current_dir(temp.path())
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error loading data:"));
}
