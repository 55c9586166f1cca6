use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, setup_test_db, upt};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    // re-running init over an existing database is harmless
    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Existing database verified"));
}

#[test]
fn test_add_and_list_roundtrip() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-02"))
        .stdout(contains("2025-06-03"))
        .stdout(contains("15.00")) // units on the big day
        .stdout(contains("1.88")) // its UPH against the 10/4 divisors
        .stdout(contains("Page 1 of 1 (2 rows)"));
}

#[test]
fn test_add_same_date_updates_in_place() {
    let db_path = setup_test_db("add_upsert");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "add", "2025-06-02", "--docs", "120"])
        .assert()
        .success()
        .stdout(contains("updated for 2025-06-02"));

    // still one row for the date, with the new count and kept times
    upt()
        .args(["--db", &db_path, "list", "--filter", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("14:00"))
        .stdout(contains("120"))
        .stdout(contains("Page 1 of 1 (1 rows)"));
}

#[test]
fn test_add_rejects_nonpositive_net_hours() {
    let db_path = setup_test_db("add_rejects");
    init_db_with_data(&db_path);

    upt()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-06-10",
            "--start",
            "09:00",
            "--end",
            "09:30",
            "--break",
            "60",
        ])
        .assert()
        .failure()
        .stderr(contains("net hours worked must be positive"));
}

#[test]
fn test_add_uses_settings_defaults() {
    let db_path = setup_test_db("add_defaults");
    init_db_with_data(&db_path);

    // bare add: shift times come from the settings singleton (09:00-17:30)
    upt()
        .args(["--db", &db_path, "add", "2025-06-11", "--docs", "10"])
        .assert()
        .success()
        .stdout(contains("added for 2025-06-11"));

    upt()
        .args(["--db", &db_path, "list", "--filter", "2025-06-11"])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("17:30"));
}

#[test]
fn test_list_sort_descending_and_pagination() {
    let db_path = setup_test_db("list_sort_page");
    init_db_with_data(&db_path);

    // descending by date: the later day must appear first
    upt()
        .args(["--db", &db_path, "list", "--sort", "date", "--desc"])
        .assert()
        .success()
        .stdout(
            predicates::str::is_match("2025-06-03[\\s\\S]*2025-06-02").expect("Invalid regex"),
        );

    // one row per page: page 2 holds only the second date
    upt()
        .args([
            "--db", &db_path, "list", "--page-size", "1", "--page", "2",
        ])
        .assert()
        .success()
        .stdout(contains("2025-06-03"))
        .stdout(contains("Page 2 of 2 (2 rows)"))
        .stdout(
            predicates::str::is_match("2025-06-02")
                .expect("Invalid regex")
                .not(),
        );

    // out-of-range pages clamp instead of erroring
    upt()
        .args(["--db", &db_path, "list", "--page", "99"])
        .assert()
        .success()
        .stdout(contains("Page 1 of 1 (2 rows)"));
}

#[test]
fn test_list_filter_no_match() {
    let db_path = setup_test_db("list_no_match");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "list", "--filter", "nonexistent"])
        .assert()
        .success()
        .stdout(contains("No work logs match."));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_confirm");
    init_db_with_data(&db_path);

    // decline first: the row survives
    upt()
        .args(["--db", &db_path, "--test", "del", "2025-06-03"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    upt()
        .args(["--db", &db_path, "list", "--filter", "2025-06-03"])
        .assert()
        .success()
        .stdout(contains("2025-06-03"));

    // confirm: the row goes away
    upt()
        .args(["--db", &db_path, "--test", "del", "2025-06-03"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted work log for 2025-06-03"));

    upt()
        .args(["--db", &db_path, "list", "--filter", "2025-06-03"])
        .assert()
        .success()
        .stdout(contains("No work logs match."));
}

#[test]
fn test_del_missing_date_fails() {
    let db_path = setup_test_db("del_missing");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "--test", "del", "2099-01-01"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No entry found for date 2099-01-01"));
}

#[test]
fn test_status_full_day_numbers() {
    let db_path = setup_test_db("status_full_day");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "status", "--date", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("Status for 2025-06-02"))
        .stdout(contains("8.00 h"))
        .stdout(contains("15.00"))
        .stdout(contains("1.88 UPH"))
        .stdout(contains("48.00"))
        .stdout(contains("goal missed by 33.00 units"));
}

#[test]
fn test_status_live_projection() {
    let db_path = setup_test_db("status_live");
    init_db_with_data(&db_path);

    // frozen clock mid-shift: 3.5 net hours, pace 15/3.5 ≈ 4.29 < 6.0
    upt()
        .args([
            "--db",
            &db_path,
            "status",
            "--date",
            "2025-06-02",
            "--at",
            "18:00",
        ])
        .assert()
        .success()
        .stdout(contains("3.50 h (so far)"))
        .stdout(contains("behind pace, projected 34.29 units by shift end (short 13.71)"));
}

#[test]
fn test_status_without_entry_fails() {
    let db_path = setup_test_db("status_no_entry");
    init_db_with_data(&db_path);

    upt()
        .args(["--db", &db_path, "status", "--date", "2099-01-01"])
        .assert()
        .failure()
        .stderr(contains("No entry found for date 2099-01-01"));
}

#[test]
fn test_settings_show_and_update() {
    let db_path = setup_test_db("settings");
    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("Default start:"))
        .stdout(contains("09:00"))
        .stdout(contains("Auto-switch target:"))
        .stdout(contains("off"));

    upt()
        .args([
            "--db",
            &db_path,
            "settings",
            "--start",
            "08:00",
            "--break",
            "45",
            "--auto-switch",
            "on",
        ])
        .assert()
        .success()
        .stdout(contains("Settings updated"));

    upt()
        .args(["--db", &db_path, "settings", "--show"])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("45 min").or(contains("(45 min)")))
        .stdout(contains("on"));
}

#[test]
fn test_settings_rejects_bad_auto_switch() {
    let db_path = setup_test_db("settings_bad_flag");
    upt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "settings", "--auto-switch", "maybe"])
        .assert()
        .failure()
        .stderr(contains("'on' or 'off'"));
}

#[test]
fn test_auto_switch_activates_explicit_target() {
    let db_path = setup_test_db("auto_switch");
    init_db_with_data(&db_path);

    upt()
        .args([
            "--db", &db_path, "target", "add", "sprint", "--uph", "8.0", "--docs-per-unit", "8",
            "--videos-per-unit", "2",
        ])
        .assert()
        .success();

    upt()
        .args(["--db", &db_path, "settings", "--auto-switch", "on"])
        .assert()
        .success();

    upt()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-06-12",
            "--docs",
            "16",
            "--target",
            "sprint",
        ])
        .assert()
        .success()
        .stdout(contains("Active target switched to 'sprint'"));

    upt()
        .args(["--db", &db_path, "target", "list"])
        .assert()
        .success()
        .stdout(contains("Active target: sprint"));
}
