use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_stockfile(path: &Path, extra_env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockfile"));
    cmd.env("STOCKFILE_PATH", path).env("RUST_LOG", "warn");
    for (key, value) in extra_env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to spawn stockfile")
}

#[test]
fn demo_prints_session_and_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let output = run_stockfile(&path, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "Apple stock: 7\n\
         Low items: ['banana']\n\
         \n\
         Items Report:\n\
         apple -> 7\n\
         banana -> 2\n\
         Eval function removed for security.\n"
    );

    let file = fs::read_to_string(&path).unwrap();
    assert_eq!(file, "{\n    \"apple\": 7,\n    \"banana\": 2\n}");
}

#[test]
fn threshold_comes_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let output = run_stockfile(&path, &[("STOCKFILE_LOW_STOCK_THRESHOLD", "8")]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Low items: ['apple', 'banana']\n"));
}

#[test]
fn corrupt_file_exits_non_zero_and_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "not json at all").unwrap();

    let output = run_stockfile(&path, &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
}

#[test]
fn corrupt_file_is_reset_when_allowed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "not json at all").unwrap();

    let output = run_stockfile(&path, &[("STOCKFILE_RESET_ON_CORRUPT", "1")]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("Apple stock: 7\n"));
}
