//! CLI integration tests for the non-interactive modes.
//!
//! Uses `assert_cmd` to spawn the `robocmd` binary and verify exit codes,
//! stdout content, and stderr content. The TUI mode needs a real terminal
//! and is not exercised here.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn robocmd() -> Command {
    let mut cmd = cargo_bin_cmd!("robocmd");
    cmd.current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

/// Helper: write `contents` to a file inside `dir` and return its path.
fn write_program(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write program");
    path
}

#[test]
fn help_mentions_language() {
    robocmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("robot command language"));
}

#[test]
fn print_renders_trace() {
    robocmd()
        .args(["programs/square.robo", "--print"])
        .assert()
        .success()
        .stdout("[program [repeat 4 [go, go, go, right]]]\n")
        .stderr(predicate::str::contains("Parsed successfully"));
}

#[test]
fn run_prints_moves_and_final_state() {
    let dir = TempDir::new().unwrap();
    let path = write_program(dir.path(), "turn.robo", "program go right go end");

    robocmd()
        .arg(&path)
        .arg("--run")
        .assert()
        .success()
        .stdout(predicate::str::contains("go    -> (0, 1) facing north"))
        .stdout(predicate::str::contains("right -> (0, 1) facing east"))
        .stdout(predicate::str::contains("final: (1, 1) facing east"));
}

#[test]
fn run_reports_step_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_program(dir.path(), "loop.robo", "program repeat 50 go end end");

    robocmd()
        .arg(&path)
        .args(["--run", "--max-steps", "10"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("final: (0, 10) facing north"))
        .stderr(predicate::str::contains("Step limit of 10 exceeded"));
}

#[test]
fn parse_error_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = write_program(dir.path(), "bad.robo", "program go jump end");

    robocmd()
        .arg(&path)
        .arg("--print")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parser error"))
        .stderr(predicate::str::contains("'jump' is undefined"));
}

#[test]
fn missing_file_exits_1() {
    robocmd()
        .args(["programs/does-not-exist.robo", "--print"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn batch_prints_every_line() {
    robocmd()
        .args(["programs/batch.txt", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text = \"program end\"\nnode = [program []]\n"))
        .stdout(predicate::str::contains(
            "node = [program [repeat 4 [repeat 3 [go, right, go, left], right]]]",
        ));
}

#[test]
fn batch_continues_after_error() {
    let dir = TempDir::new().unwrap();
    let path = write_program(
        dir.path(),
        "mixed.txt",
        "program go\n\nprogram left end\n",
    );

    robocmd()
        .arg(&path)
        .arg("--batch")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "error: Parse error at line 1, column 11: 'end' is expected, but end of input is found",
        ))
        .stdout(predicate::str::contains("node = [program [left]]"));
}

#[test]
fn modes_conflict() {
    robocmd()
        .args(["programs/square.robo", "--print", "--run"])
        .assert()
        .failure();
}
