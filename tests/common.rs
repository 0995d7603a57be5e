#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("stafflogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stafflogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and seed one staff member, one class and a few logs
/// used by most tests. Staff and class both get id 1.
pub fn init_db_with_data(db_path: &str) {
    sl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    sl().args(["--db", db_path, "staff", "--add", "Jane Doe", "--email", "jane@school.example"])
        .assert()
        .success();

    sl().args(["--db", db_path, "class", "--add", "Algebra"])
        .assert()
        .success();

    sl().args(["--db", db_path, "arrival", "2025-09-01", "1", "08:45"])
        .assert()
        .success();

    sl().args(["--db", db_path, "arrival", "2025-09-15", "1", "09:30"])
        .assert()
        .success();

    sl().args([
        "--db",
        db_path,
        "teaching",
        "2025-09-01",
        "1",
        "1",
        "10:00",
        "11:30",
    ])
    .assert()
    .success();
}
