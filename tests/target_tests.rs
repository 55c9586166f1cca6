mod common;
use common::{init_db_with_data, setup_test_db, upt};
use predicates::prelude::*;

fn add_target(db_path: &str, name: &str, uph: &str) -> assert_cmd::assert::Assert {
    upt()
        .args([
            "--db",
            db_path,
            "target",
            "add",
            name,
            "--uph",
            uph,
            "--docs-per-unit",
            "10",
            "--videos-per-unit",
            "4",
        ])
        .assert()
}

#[test]
fn test_first_target_created_and_activated() {
    let db_path = setup_test_db("target_first_active");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // No target yet: the first one becomes active immediately.
    add_target(&db_path, "alpha", "6.0")
        .success()
        .stdout(predicate::str::contains(
            "Target 'alpha' created and activated (6 UPH)",
        ));

    // The second one does not steal the flag.
    add_target(&db_path, "beta", "8.0")
        .success()
        .stdout(predicate::str::contains("Target 'beta' created (8 UPH)"))
        .stdout(predicate::str::contains("activated").not());

    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active target: alpha"));
}

#[test]
fn test_target_list_empty_hint() {
    let db_path = setup_test_db("target_list_empty");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No targets defined. Create one with 'target add'.",
        ));
}

#[test]
fn test_set_active_switches_target() {
    let db_path = setup_test_db("target_set_active");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();
    add_target(&db_path, "sprint", "8.0").success();

    upt()
        .args(["--db", &db_path, "target", "set-active", "sprint"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active target is now 'sprint'"));

    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active target: sprint"));
}

// Exactly one target row carries the active flag no matter how often
// activation moves around.
#[test]
fn test_single_active_after_activation_sequence() {
    let db_path = setup_test_db("target_single_active");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();
    add_target(&db_path, "beta", "7.0").success();
    add_target(&db_path, "gamma", "8.0").success();

    for name in ["beta", "gamma", "alpha", "gamma"] {
        upt()
            .args(["--db", &db_path, "target", "set-active", name])
            .assert()
            .success();
    }

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let active_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM targets WHERE is_active = 1",
            [],
            |r| r.get(0),
        )
        .expect("count active");
    assert_eq!(active_count, 1);

    let active_name: String = conn
        .query_row("SELECT name FROM targets WHERE is_active = 1", [], |r| {
            r.get(0)
        })
        .expect("active name");
    assert_eq!(active_name, "gamma");
}

#[test]
fn test_delete_active_target_rejected() {
    let db_path = setup_test_db("target_del_active");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();

    upt()
        .args(["--db", &db_path, "target", "del", "alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Target 'alpha' is the active target and cannot be deleted",
        ));

    // The row must survive the rejected delete.
    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"));
}

#[test]
fn test_delete_inactive_target() {
    let db_path = setup_test_db("target_del_inactive");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();
    add_target(&db_path, "beta", "8.0").success();

    upt()
        .args(["--db", &db_path, "target", "del", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target 'beta' deleted"));

    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("beta").not())
        .stdout(predicate::str::contains("Active target: alpha"));
}

// Deleting a target that work logs still point at keeps the rows and
// warns that their metrics now follow the active target.
#[test]
fn test_delete_referenced_target_warns() {
    let db_path = setup_test_db("target_del_referenced");
    init_db_with_data(&db_path);

    add_target(&db_path, "beta", "8.0").success();

    upt()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-06-04",
            "--start",
            "09:00",
            "--end",
            "17:00",
            "--docs",
            "10",
            "--videos",
            "2",
            "--target",
            "beta",
        ])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "target", "del", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target 'beta' deleted"))
        .stdout(predicate::str::contains(
            "1 work logs still reference 'beta' and now fall back to the active target",
        ));

    // The orphaned day now displays against the active target.
    upt()
        .args([
            "--db",
            &db_path,
            "list",
            "--from",
            "2025-06-04",
            "--to",
            "2025-06-04",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 rows)"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn test_duplicate_target_name_rejected() {
    let db_path = setup_test_db("target_duplicate");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();

    add_target(&db_path, "alpha", "9.0")
        .failure()
        .stderr(predicate::str::contains(
            "a target named 'alpha' already exists (use 'target edit')",
        ));
}

#[test]
fn test_target_edit_keeps_unset_fields() {
    let db_path = setup_test_db("target_edit_merge");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();

    upt()
        .args(["--db", &db_path, "target", "edit", "alpha", "--uph", "9.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target 'alpha' updated"));

    // Rate changed, divisors untouched.
    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9.50"))
        .stdout(predicate::str::contains("10.00"))
        .stdout(predicate::str::contains("4.00"));
}

#[test]
fn test_target_rename() {
    let db_path = setup_test_db("target_rename");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    add_target(&db_path, "alpha", "6.0").success();
    add_target(&db_path, "beta", "8.0").success();

    upt()
        .args([
            "--db",
            &db_path,
            "target",
            "edit",
            "alpha",
            "--rename",
            "bravo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target 'bravo' updated"));

    // The active flag follows the row through the rename.
    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha").not())
        .stdout(predicate::str::contains("Active target: bravo"));

    // Renaming onto a taken name is rejected.
    upt()
        .args([
            "--db",
            &db_path,
            "target",
            "edit",
            "bravo",
            "--rename",
            "beta",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("a target named 'beta' already exists"));
}

#[test]
fn test_target_add_rejects_nonpositive_values() {
    let db_path = setup_test_db("target_validation");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_target(&db_path, "alpha", "0")
        .failure()
        .stderr(predicate::str::contains("target rate must be positive"));

    upt()
        .args([
            "--db",
            &db_path,
            "target",
            "add",
            "alpha",
            "--uph",
            "6.0",
            "--docs-per-unit",
            "0",
            "--videos-per-unit",
            "4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("docs-per-unit must be positive"));
}

#[test]
fn test_missing_target_name_errors() {
    let db_path = setup_test_db("target_missing");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    for args in [
        vec!["target", "set-active", "ghost"],
        vec!["target", "edit", "ghost", "--uph", "5.0"],
        vec!["target", "del", "ghost"],
    ] {
        let mut full = vec!["--db", &db_path];
        full.extend(args);
        upt()
            .args(&full)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Target not found: ghost"));
    }
}
