use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture(dir: &Path) -> PathBuf {
    let path = dir.join("app.jsx");
    fs::write(&path, "zero\none\ntwo\nthree\nfour\nfive\n").unwrap();
    path
}

fn lineprune() -> Command {
    Command::cargo_bin("lineprune").unwrap()
}

#[test]
fn removes_the_guarded_range() {
    let dir = tempdir().unwrap();
    let path = fixture(dir.path());

    lineprune()
        .arg(&path)
        .args(["--start", "3", "--end", "5", "--guard", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed 3 lines"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "zero\none\nfive\n");
}

#[test]
fn guard_mismatch_exits_2_and_leaves_the_file_alone() {
    let dir = tempdir().unwrap();
    let path = fixture(dir.path());
    let before = fs::read_to_string(&path).unwrap();

    lineprune()
        .arg(&path)
        .args(["--start", "3", "--end", "5", "--guard", "space-y-6"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("guard mismatch"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn out_of_bounds_range_exits_1() {
    let dir = tempdir().unwrap();
    let path = fixture(dir.path());
    let before = fs::read_to_string(&path).unwrap();

    lineprune()
        .arg(&path)
        .args(["--start", "3", "--end", "99", "--guard", "two"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of bounds"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn markers_select_the_range_and_replacement_fills_it() {
    let dir = tempdir().unwrap();
    let path = fixture(dir.path());
    let replacement = dir.path().join("block.txt");
    fs::write(&replacement, "patched\n").unwrap();

    lineprune()
        .arg(&path)
        .args(["--start-marker", "one", "--end-marker", "four"])
        .arg("--replace-with")
        .arg(&replacement)
        .assert()
        .success()
        .stdout(predicate::str::contains("replaced 4 lines with 1"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "zero\npatched\nfive\n");
}

#[test]
fn missing_file_exits_1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    lineprune()
        .arg(&path)
        .args(["--start", "1", "--end", "1", "--guard", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn offsets_without_a_guard_are_rejected() {
    let dir = tempdir().unwrap();
    let path = fixture(dir.path());

    lineprune()
        .arg(&path)
        .args(["--start", "3", "--end", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--guard"));
}
