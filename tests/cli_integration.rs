use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn sarf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sarf").unwrap();
    cmd.env("SARF_HOME", home);
    cmd
}

#[test]
fn registers_and_lists_roots() {
    let temp = tempfile::tempdir().unwrap();

    sarf(temp.path())
        .args(["root", "add", "كتب"])
        .assert()
        .success();

    sarf(temp.path())
        .args(["root", "has", "كتب"])
        .assert()
        .success();

    sarf(temp.path())
        .args(["root", "has", "درس"])
        .assert()
        .failure();

    sarf(temp.path())
        .args(["root", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("كتب"));
}

#[test]
fn rejects_a_malformed_root() {
    let temp = tempfile::tempdir().unwrap();

    sarf(temp.path())
        .args(["root", "add", "كتبب"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid root"));
}

#[test]
fn generates_and_validates_against_default_schemes() {
    let temp = tempfile::tempdir().unwrap();

    sarf(temp.path())
        .args(["root", "add", "كتب"])
        .assert()
        .success();

    // فاعل is part of the seeded scheme table
    sarf(temp.path())
        .args(["gen", "كتب", "فاعل"])
        .assert()
        .success()
        .stdout(predicates::str::contains("كاتب"));

    sarf(temp.path())
        .args(["check", "كاتب", "كتب"])
        .assert()
        .success()
        .stdout(predicates::str::contains("فاعل"));

    sarf(temp.path())
        .args(["check", "كتبب", "كتب"])
        .assert()
        .failure();
}

#[test]
fn stores_generated_words_without_duplicates() {
    let temp = tempfile::tempdir().unwrap();

    sarf(temp.path())
        .args(["root", "add", "كتب"])
        .assert()
        .success();

    sarf(temp.path())
        .args(["gen", "كتب", "فاعل", "--store"])
        .assert()
        .success();
    sarf(temp.path())
        .args(["gen", "كتب", "فاعل", "--store"])
        .assert()
        .success();

    let listing = sarf(temp.path())
        .args(["word", "list", "كتب"])
        .assert()
        .success()
        .stdout(predicates::str::contains("كاتب"));
    let stdout = String::from_utf8_lossy(&listing.get_output().stdout).to_string();
    assert_eq!(stdout.matches("كاتب").count(), 1);
}

#[test]
fn bulk_loads_roots_from_a_file() {
    let temp = tempfile::tempdir().unwrap();
    let roots_file = temp.path().join("roots.txt");
    std::fs::write(&roots_file, "كتب\nدرس كتب\nxx toolong\n").unwrap();

    sarf(temp.path())
        .args(["root", "load"])
        .arg(&roots_file)
        .assert()
        .success()
        .stdout(predicates::str::contains("2 new roots"));

    // Everything in the file is already registered now
    sarf(temp.path())
        .args(["root", "load"])
        .arg(&roots_file)
        .assert()
        .success()
        .stdout(predicates::str::contains("0 new roots"));
}

#[test]
fn snapshot_export_import_round_trips() {
    let temp = tempfile::tempdir().unwrap();
    let snapshot = temp.path().join("snapshot.json");

    sarf(temp.path())
        .args(["root", "add", "كتب"])
        .assert()
        .success();
    sarf(temp.path())
        .args(["gen-all", "كتب", "--store"])
        .assert()
        .success();

    sarf(temp.path())
        .arg("export")
        .arg(&snapshot)
        .assert()
        .success();

    sarf(temp.path())
        .args(["root", "rm", "كتب"])
        .assert()
        .success();
    sarf(temp.path())
        .args(["root", "has", "كتب"])
        .assert()
        .failure();

    sarf(temp.path())
        .arg("import")
        .arg(&snapshot)
        .assert()
        .success();

    sarf(temp.path())
        .args(["root", "has", "كتب"])
        .assert()
        .success();
    sarf(temp.path())
        .args(["word", "list", "كتب"])
        .assert()
        .success()
        .stdout(predicates::str::contains("كاتب"));
}

#[test]
fn malformed_snapshot_is_rejected_and_state_survives() {
    let temp = tempfile::tempdir().unwrap();
    let bad = temp.path().join("bad.json");
    std::fs::write(&bad, "{ not a snapshot").unwrap();

    sarf(temp.path())
        .args(["root", "add", "كتب"])
        .assert()
        .success();

    sarf(temp.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid snapshot"));

    sarf(temp.path())
        .args(["root", "has", "كتب"])
        .assert()
        .success();
}

#[test]
fn missing_root_reports_not_found() {
    let temp = tempfile::tempdir().unwrap();

    sarf(temp.path())
        .args(["word", "list", "غيب"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Root not found"));
}

#[test]
fn scheme_crud_via_cli() {
    let temp = tempfile::tempdir().unwrap();

    sarf(temp.path())
        .args(["scheme", "add", "مثال", "مفعل", "-d", "example pattern"])
        .assert()
        .success();

    // Duplicate name is reported, not fatal
    sarf(temp.path())
        .args(["scheme", "add", "مثال", "فعول"])
        .assert()
        .success()
        .stdout(predicates::str::contains("already taken"));

    sarf(temp.path())
        .args(["scheme", "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("مثال").and(predicates::str::contains("مفعل")));

    sarf(temp.path())
        .args(["scheme", "rm", "مثال"])
        .assert()
        .success();
}
