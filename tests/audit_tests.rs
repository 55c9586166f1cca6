mod common;
use common::{init_db_with_data, setup_test_db, upt};
use predicates::prelude::*;

// init_db_with_data leaves five audit rows behind: the schema-creation
// marker, the init marker, the 'default' target creation and one create
// per work log.

#[test]
fn test_audit_lists_newest_first() {
    let db_path = setup_test_db("audit_order");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📜 Audit trail:"))
        .stdout(
            predicate::str::is_match(
                "Created work log for 2025-06-03[\\s\\S]*Created work log for 2025-06-02[\\s\\S]*Created target 'default'",
            )
            .unwrap(),
        )
        .stdout(predicate::str::contains("Page 1 of 1 (5 rows)"));
}

#[test]
fn test_audit_action_filter() {
    let db_path = setup_test_db("audit_action_filter");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "audit", "--action", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created target 'default'"))
        .stdout(predicate::str::contains("Database initialized").not())
        .stdout(predicate::str::contains("(3 rows)"));
}

#[test]
fn test_audit_entity_filter() {
    let db_path = setup_test_db("audit_entity_filter");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "audit", "--entity", "work_log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created work log for 2025-06-02"))
        .stdout(predicate::str::contains("Created target").not())
        .stdout(predicate::str::contains("(2 rows)"));
}

#[test]
fn test_audit_text_filter() {
    let db_path = setup_test_db("audit_text_filter");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "audit", "--filter", "2025-06-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created work log for 2025-06-02"))
        .stdout(predicate::str::contains("(1 rows)"));
}

#[test]
fn test_audit_invalid_filter_rejected() {
    let db_path = setup_test_db("audit_invalid_filter");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "audit", "--action", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid audit filter: bogus"));

    upt()
        .args(["--db", &db_path, "audit", "--entity", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid audit filter: nothing"));
}

#[test]
fn test_audit_range_filter() {
    let db_path = setup_test_db("audit_range");
    init_db_with_data(&db_path);

    // Audit timestamps are written at run time, so a lower bound far in
    // the past keeps everything and an upper bound there drops everything.
    upt()
        .args(["--db", &db_path, "audit", "--from", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 rows)"));

    upt()
        .args(["--db", &db_path, "audit", "--to", "2000-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit rows match."));
}

#[test]
fn test_audit_page_clamped() {
    let db_path = setup_test_db("audit_page_clamp");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "audit", "--page", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1 (5 rows)"));
}

// Every kind of mutation leaves its own row in the trail.
#[test]
fn test_audit_records_full_lifecycle() {
    let db_path = setup_test_db("audit_lifecycle");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "add", "2025-06-02", "--docs", "110"])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "del", "2025-06-03"])
        .write_stdin("y\n")
        .assert()
        .success();

    upt()
        .args([
            "--db",
            &db_path,
            "target",
            "add",
            "sprint",
            "--uph",
            "8.0",
            "--docs-per-unit",
            "12",
            "--videos-per-unit",
            "5",
        ])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "target", "set-active", "sprint"])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "settings", "--start", "08:00"])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated work log for 2025-06-02"))
        .stdout(predicate::str::contains("Deleted work log for 2025-06-03"))
        .stdout(predicate::str::contains("Created target 'sprint'"))
        .stdout(predicate::str::contains("Activated target 'sprint'"))
        .stdout(predicate::str::contains("Updated user settings"))
        .stdout(predicate::str::contains("(10 rows)"));
}
