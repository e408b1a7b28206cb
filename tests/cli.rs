// linesieve - tests/cli.rs
//
// Binary-level tests: argument validation, console output, exit codes and
// the fixed output file in the working directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const USAGE: &str = "Usage: linesieve input_filename.txt\n";

fn linesieve(cwd: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linesieve").unwrap();
    cmd.current_dir(cwd.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    linesieve(&dir).assert().code(2).stdout(USAGE);
    assert!(!dir.path().join("filtered_output.txt").exists());
}

#[test]
fn test_two_arguments_prints_usage_without_touching_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.log"), "TILE0 L1.5 th0 x\n").unwrap();
    linesieve(&dir)
        .args(["a.log", "b.log"])
        .assert()
        .code(2)
        .stdout(USAGE);
    assert!(!dir.path().join("filtered_output.txt").exists());
}

#[test]
fn test_missing_input_prints_diagnostic() {
    let dir = TempDir::new().unwrap();
    linesieve(&dir)
        .arg("nope.txt")
        .assert()
        .code(1)
        .stdout("Error: File 'nope.txt' not found.\n")
        .stderr(predicate::str::is_empty());
    assert!(!dir.path().join("filtered_output.txt").exists());
}

#[test]
fn test_input_name_starting_with_hyphen_is_processed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("-x.log"), "TILE0 L1.5 th0: Sent\nnoise\n").unwrap();
    linesieve(&dir)
        .arg("-x.log")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("filtered_output.txt")).unwrap(),
        "TILE0 L1.5 th0: Sent\n"
    );
}

#[test]
fn test_reports_runs_and_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = "\
TILE0 L1.5 th0: Received A
TILE2 L1.5 th0: Received X
TILE0 L1.5 th0: Received B
TILE0 L1.5 th0: Received C
TILE0 L1.5 th0: Done
";
    fs::write(dir.path().join("trace.log"), input).unwrap();

    linesieve(&dir).arg("trace.log").assert().success().stdout(
        "3 Consecutive 'Received' lines starting from line  1\n\
         TILE0 L1.5 th0: Received A\n\
         TILE0 L1.5 th0: Received B\n\
         TILE0 L1.5 th0: Received C\n\n",
    );

    let written = fs::read_to_string(dir.path().join("filtered_output.txt")).unwrap();
    assert_eq!(
        written,
        "TILE0 L1.5 th0: Received A\n\
         TILE0 L1.5 th0: Received B\n\
         TILE0 L1.5 th0: Received C\n\
         TILE0 L1.5 th0: Done\n"
    );
}

#[test]
fn test_trailing_run_prints_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("trace.log"),
        "TILE0 L1.5 th0: Received A\nTILE0 L1.5 th0: Received B\nTILE0 L1.5 th0: Received C",
    )
    .unwrap();
    linesieve(&dir)
        .arg("trace.log")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_empty_input_creates_empty_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.log"), "").unwrap();
    linesieve(&dir)
        .arg("empty.log")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(
        fs::read(dir.path().join("filtered_output.txt")).unwrap(),
        Vec::<u8>::new()
    );
}

#[test]
fn test_debug_flag_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trace.log"), "nothing here\n").unwrap();
    linesieve(&dir)
        .args(["--debug", "trace.log"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Scan complete"));
}
