mod common;
use common::{init_db_with_data, setup_test_db, upt};
use predicates::prelude::*;

#[test]
fn test_db_without_flags_prints_hint() {
    let db_path = setup_test_db("db_no_flags");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Nothing to do: pass --migrate, --check, --vacuum or --info",
        ));
}

#[test]
fn test_db_check_passes_on_healthy_database() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ Integrity check passed."));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate_twice");
    init_db_with_data(&db_path);

    for _ in 0..2 {
        upt()
            .args(["--db", &db_path, "db", "--migrate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("✔ Migration completed."));
    }

    // The data survives repeated migration runs.
    upt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(2 rows)"));
}

#[test]
fn test_db_vacuum_runs() {
    let db_path = setup_test_db("db_vacuum");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ Vacuum completed."));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• Work logs:"))
        .stdout(predicate::str::contains("• Targets:"))
        .stdout(predicate::str::contains("• Audit rows:"))
        .stdout(predicate::str::contains("• Active target:"))
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("from: 2025-06-02"))
        .stdout(predicate::str::contains("to:   2025-06-03"));
}

#[test]
fn test_db_check_and_info_combined() {
    let db_path = setup_test_db("db_combined");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ Integrity check passed."))
        .stdout(predicate::str::contains("• Work logs:"));
}
