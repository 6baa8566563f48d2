use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Command with an isolated config directory and no RUST_LOG.
fn dupline(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dupline").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_shows_help() {
    let home = tempdir().unwrap();
    dupline(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("total line count").not());
}

#[test]
fn test_help_flag() {
    let home = tempdir().unwrap();
    dupline(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--extension"));
}

#[test]
fn test_text_report() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x\ny\nx\n").unwrap();
    fs::write(dir.path().join("b.txt"), "x\n").unwrap();

    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    dupline(&home)
        .arg("-d")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate line: x\n"))
        .stdout(predicate::str::contains(format!("\t{}:3\n", a.display())))
        .stdout(predicate::str::contains(format!("\t{}:1\n", b.display())))
        .stdout(predicate::str::contains("duplicate line: y").not())
        .stdout(predicate::str::contains("total line count: 4"))
        .stdout(predicate::str::contains("duplication line count: 3(1)"));
}

#[test]
fn test_missing_directory_fails_without_report() {
    let home = tempdir().unwrap();
    dupline(&home)
        .args(["-d", "/non/existent/dir/31337"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("check finished").not())
        .stderr(predicate::str::contains("DL001"))
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_missing_file_json_error() {
    let home = tempdir().unwrap();
    let output = dupline(&home)
        .args(["-f", "/non/existent/file/31337.txt", "--json-errors"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["code"], "DL001");
}

#[test]
fn test_verbose_logs_progress_to_stdout() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("a.go"), "x\n").unwrap();
    fs::write(dir.path().join("b.txt"), "x\n").unwrap();

    dupline(&home)
        .arg("-v")
        .arg("-d")
        .arg(dir.path())
        .args(["--ext", "go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is a directory"))
        .stdout(predicate::str::contains("does not match extensions"))
        .stdout(predicate::str::contains("search: "))
        .stdout(predicate::str::contains("total line count: 1"));
}

#[test]
fn test_json_output() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "dup\ndup\nsolo\n").unwrap();

    let output = dupline(&home)
        .arg("-f")
        .arg(&file)
        .args(["-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["summary"]["total_lines"], 3);
    assert_eq!(parsed["summary"]["duplicate_groups"], 1);
    assert_eq!(parsed["duplicates"][0]["line"], "dup");
    assert_eq!(parsed["duplicates"][0]["locations"][1]["line"], 2);
}

#[test]
fn test_csv_output() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "dup\ndup\n").unwrap();

    dupline(&home)
        .arg("-f")
        .arg(&file)
        .args(["--output", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("group_id,line,path,line_number\n"))
        .stdout(predicate::str::contains(",2\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_saved_config_never_changes_scanned_files() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "x\nx\n").unwrap();

    dupline(&home)
        .args(["--save-config", "--ext", "rs", "--sort", "content"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").not());

    let saved = fs::read_to_string(home.path().join("dupline").join("config.json")).unwrap();
    assert!(saved.contains("content"));
    assert!(!saved.contains("extensions"));

    dupline(&home)
        .arg("-d")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("total line count: 2"))
        .stdout(predicate::str::contains("duplication line count: 2(1)"));
}

#[test]
fn test_verbose_json_output_stays_parseable() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("a.txt"), "dup\ndup\n").unwrap();

    let output = dupline(&home)
        .arg("-v")
        .arg("-d")
        .arg(dir.path())
        .args(["-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["summary"]["duplicate_groups"], 1);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("search: "));
    assert!(stderr.contains("is a directory"));
}

#[test]
fn test_verbose_csv_output_starts_with_header() {
    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "dup\ndup\n").unwrap();

    dupline(&home)
        .arg("-v")
        .arg("-d")
        .arg(dir.path())
        .args(["-o", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("group_id,line,path,line_number\n"))
        .stderr(predicate::str::contains("duplication check start"));
}

#[cfg(unix)]
#[test]
fn test_reader_closing_early_is_not_an_error() {
    use assert_cmd::cargo::CommandCargoExt;
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};

    let home = tempdir().unwrap();
    let dir = tempdir().unwrap();
    // Report far larger than a pipe buffer
    fs::write(dir.path().join("a.txt"), "x\n".repeat(50_000)).unwrap();

    let mut child = StdCommand::cargo_bin("dupline")
        .unwrap()
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("-d")
        .arg(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut head = [0u8; 16];
    let mut stdout = child.stdout.take().unwrap();
    stdout.read_exact(&mut head).unwrap();
    drop(stdout);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[cfg(unix)]
#[test]
fn test_report_paths_are_cleaned() {
    let home = tempdir().unwrap();
    let root = tempdir().unwrap();
    let src = root.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.go"), "x\nx\n").unwrap();

    dupline(&home)
        .current_dir(root.path())
        .args(["-d", "./src/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\tsrc/a.go:1\n\tsrc/a.go:2\n"))
        .stdout(predicate::str::contains("./src").not());
}
