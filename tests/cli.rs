#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notedb(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notedb").unwrap();
    cmd.env("NOTEDB_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_list_and_persist() {
    let home = TempDir::new().unwrap();

    notedb(&home)
        .args(["add", "buy", "milk", "-p", "high", "-d", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added (0): buy milk"));

    notedb(&home)
        .args(["add", "water plants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added (1)"));

    notedb(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("water plants"));

    let raw = fs::read_to_string(home.path().join("notes.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["priority"], "high");
    assert_eq!(value[1]["priority"], "low");
}

#[test]
fn empty_store_lists_nothing() {
    let home = TempDir::new().unwrap();

    notedb(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found."));
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn done_edit_and_delete() {
    let home = TempDir::new().unwrap();
    notedb(&home).args(["add", "first"]).assert().success();
    notedb(&home).args(["add", "second"]).assert().success();

    notedb(&home)
        .args(["done", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note completed (0)"));

    notedb(&home)
        .args(["list", "--done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first"))
        .stdout(predicate::str::contains("second").not());

    notedb(&home)
        .args(["edit", "1", "--text", "second, revised"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (1): second, revised"));

    notedb(&home)
        .args(["rm", "0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (0)"))
        .stdout(predicate::str::contains("No note with id 5"));

    notedb(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second, revised"));
}

#[test]
fn file_flag_overrides_configured_path() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("elsewhere").join("todo.json");

    notedb(&home)
        .args(["--file", custom.to_str().unwrap(), "add", "hello"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn config_default_priority_applies_to_new_notes() {
    let home = TempDir::new().unwrap();

    notedb(&home)
        .args(["config", "default-priority", "Medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-priority set to medium"));

    notedb(&home).args(["add", "call mom"]).assert().success();

    notedb(&home)
        .args(["view", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("priority: medium"));
}

#[test]
fn path_prints_data_file() {
    let home = TempDir::new().unwrap();

    notedb(&home)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.json"));
}

#[test]
fn path_follows_file_flag() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("custom.json");

    notedb(&home)
        .args(["--file", custom.to_str().unwrap(), "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));
}

#[test]
fn corrupt_file_is_reported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("notes.json"), "not json").unwrap();

    notedb(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}

#[test]
fn blank_text_is_rejected() {
    let home = TempDir::new().unwrap();

    notedb(&home)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note text cannot be empty"));
}
