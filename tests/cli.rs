use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn copyright_update(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("copyright-update").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn updates_listed_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Old.cs"), "// Copyright (c) 2020\n").unwrap();
    fs::write(temp_dir.path().join("Current.cs"), "// Copyright (c) 2024\n").unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "\"Old.cs\"\n\"Current.cs\"\n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated copyright notice in Old.cs"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Old.cs")).unwrap(),
        "// Copyright (c) 2020-2024 PlayEveryWare, Inc.\n"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Current.cs")).unwrap(),
        "// Copyright (c) 2024\n"
    );
}

#[test]
fn missing_file_exits_with_failure_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Kept.cs"), "(c) 2019-2022").unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "--output-format", "plain", "Gone.cs\nKept.cs"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Gone.cs"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Kept.cs")).unwrap(),
        "(c) 2019-2024 PlayEveryWare, Inc."
    );
}

#[test]
fn reads_file_list_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.py"), "# (c) 2021\n").unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "-q", "-"])
        .write_stdin("a.py\r\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.py")).unwrap(),
        "# (c) 2021-2024 PlayEveryWare, Inc.\n"
    );
}

#[test]
fn binary_files_are_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let content = b"(c) 2020\0binary";
    fs::write(temp_dir.path().join("blob.bin"), content).unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "--output-format", "json", "blob.bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"skipped_binary\""));

    assert_eq!(fs::read(temp_dir.path().join("blob.bin")).unwrap(), content);
}

#[test]
fn dry_run_does_not_modify_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.cs"), "(c) 2021").unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "--dry-run", "--output-format", "json", "a.cs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dry_run\":true"))
        .stdout(predicate::str::contains("\"status\":\"updated\""));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.cs")).unwrap(),
        "(c) 2021"
    );
}

#[test]
fn dry_run_says_what_would_change() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.cs"), "(c) 2021").unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "--dry-run", "--output-format", "plain", "a.cs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update copyright notice in a.cs"))
        .stdout(predicate::str::contains("Updated copyright notice").not());
}

#[test]
fn holder_flag_replaces_default_holder() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("a.cs"),
        "// (c) 2020 PlayEveryWare, Inc.\n",
    )
    .unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "--holder", "Example Corp.", "a.cs"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.cs")).unwrap(),
        "// (c) 2020-2024 Example Corp.\n"
    );
}

#[test]
fn holder_comes_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("copyright-update.toml"),
        "[notice]\nholder = \"Example Corp.\"\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("a.cs"), "(c) 2022").unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "2024", "a.cs"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.cs")).unwrap(),
        "(c) 2022-2024 Example Corp."
    );
}

#[test]
fn invalid_config_is_a_startup_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("copyright-update.toml"), "[notice\n").unwrap();

    copyright_update(temp_dir.path())
        .args(["a.cs"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn generate_config_writes_sample() {
    let temp_dir = TempDir::new().unwrap();

    copyright_update(temp_dir.path())
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("copyright-update.toml"));

    let content = fs::read_to_string(temp_dir.path().join("copyright-update.toml")).unwrap();
    assert!(content.contains("holder = \"PlayEveryWare, Inc.\""));
}

#[test]
fn rejects_malformed_year() {
    let temp_dir = TempDir::new().unwrap();

    copyright_update(temp_dir.path())
        .args(["--year", "24", "a.cs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("four digits"));
}
