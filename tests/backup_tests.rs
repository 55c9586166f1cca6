mod common;
use common::{init_db_with_data, setup_test_db, temp_out, upt};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);

    let out = temp_out("backup_copy", "sqlite");
    upt()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created:"));

    // The copy is a working database with the same rows.
    let conn = rusqlite::Connection::open(&out).expect("open backup");
    let logs: i64 = conn
        .query_row("SELECT COUNT(*) FROM work_logs", [], |r| r.get(0))
        .expect("count work logs");
    assert_eq!(logs, 2);
}

#[test]
fn test_backup_compress_replaces_plain_copy() {
    let db_path = setup_test_db("backup_compress");
    init_db_with_data(&db_path);

    let out = temp_out("backup_compress", "sqlite");
    upt()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📦 Compressed:"));

    let zip_path = Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    assert!(!Path::new(&out).exists());
    assert!(fs::metadata(&zip_path).expect("zip metadata").len() > 0);
}

#[test]
fn test_backup_decline_keeps_existing_file() {
    let db_path = setup_test_db("backup_decline");
    init_db_with_data(&db_path);

    let out = temp_out("backup_decline", "sqlite");
    fs::write(&out, "KEEP").expect("seed existing file");

    upt()
        .args(["--db", &db_path, "backup", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup cancelled by user."));

    assert_eq!(fs::read_to_string(&out).expect("read"), "KEEP");
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing_db");
    let out = temp_out("backup_missing_db", "sqlite");

    upt()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database not found"));
}

#[test]
fn test_backup_rejects_live_database_as_destination() {
    let db_path = setup_test_db("backup_live_dest");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "backup", "--file", &db_path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is the live database"));
}
