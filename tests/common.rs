#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn upt() -> Command {
    cargo_bin_cmd!("uphtrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_uphtrack.sqlite", name));
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

/// Initialize DB, define one target and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    upt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // the first target is auto-activated
    upt()
        .args([
            "--db",
            db_path,
            "target",
            "add",
            "default",
            "--uph",
            "6.0",
            "--docs-per-unit",
            "10",
            "--videos-per-unit",
            "4",
        ])
        .assert()
        .success();

    upt()
        .args([
            "--db",
            db_path,
            "add",
            "2025-06-02",
            "--start",
            "14:00",
            "--end",
            "22:30",
            "--break",
            "30",
            "--docs",
            "100",
            "--videos",
            "20",
        ])
        .assert()
        .success();

    upt()
        .args([
            "--db",
            db_path,
            "add",
            "2025-06-03",
            "--start",
            "09:00",
            "--end",
            "17:30",
            "--break",
            "30",
            "--docs",
            "40",
            "--videos",
            "8",
        ])
        .assert()
        .success();
}
