use chrono::{NaiveDate, NaiveTime};
use uphtrack::core::metrics::{self, SchedulePace};
use uphtrack::models::entry::WorkLogEntry;
use uphtrack::models::target::UphTarget;

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

fn log(start: &str, end: &str, brk: i64, training: i64, docs: i64, videos: i64) -> WorkLogEntry {
    WorkLogEntry::new(
        NaiveDate::from_ymd_opt(2025, 6, 2).expect("valid date"),
        t(start),
        t(end),
        brk,
        training,
        docs,
        videos,
        String::new(),
        None,
    )
}

fn target(uph: f64, docs_per_unit: f64, videos_per_unit: f64) -> UphTarget {
    UphTarget::new("default".to_string(), uph, docs_per_unit, videos_per_unit)
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {} ≈ {}", a, b);
}

#[test]
fn test_worked_example_full_day() {
    // 14:00-22:30 minus 30 min break: 8 h; 100 docs / 10 + 20 videos / 4 = 15 units
    let entry = log("14:00", "22:30", 30, 0, 100, 20);
    let tgt = target(6.0, 10.0, 4.0);

    let m = metrics::day_metrics(&entry, &tgt);
    assert_eq!(m.hours_worked, 8.0);
    assert_eq!(m.units_completed, 15.0);
    assert_eq!(m.units_per_hour, 1.875);
    assert_eq!(m.required_units, 48.0);
    assert_eq!(m.remaining_units, 33.0);
}

#[test]
fn test_training_minutes_reduce_net_hours() {
    let entry = log("09:00", "17:30", 30, 60, 0, 0);
    assert_eq!(entry.hours_worked(), 7.0);
}

#[test]
fn test_zero_divisor_term_contributes_zero() {
    let entry = log("14:00", "22:30", 30, 0, 100, 20);

    let no_docs = target(6.0, 0.0, 4.0);
    approx(metrics::units_completed(&entry, &no_docs), 5.0);

    let no_videos = target(6.0, 10.0, 0.0);
    approx(metrics::units_completed(&entry, &no_videos), 10.0);

    let bogus = target(6.0, f64::NAN, -3.0);
    approx(metrics::units_completed(&entry, &bogus), 0.0);
}

#[test]
fn test_uph_is_zero_without_positive_hours() {
    // break swallows the whole shift: net minutes go negative
    let entry = log("09:00", "09:30", 60, 0, 50, 0);
    assert!(entry.hours_worked() <= 0.0);

    let tgt = target(6.0, 10.0, 4.0);
    assert_eq!(metrics::units_per_hour(&entry, &tgt), 0.0);
}

#[test]
fn test_remaining_sign_tracks_goal() {
    let tgt = target(6.0, 10.0, 4.0);

    // 48 required; 15 done -> positive remaining
    let behind = log("14:00", "22:30", 30, 0, 100, 20);
    assert!(metrics::remaining_units(&behind, &tgt) > 0.0);

    // 500 docs -> 50 units >= 48 required -> zero or negative
    let ahead = log("14:00", "22:30", 30, 0, 500, 0);
    assert!(metrics::remaining_units(&ahead, &tgt) <= 0.0);
    let m = metrics::day_metrics(&ahead, &tgt);
    assert!(m.units_completed >= m.required_units);
}

#[test]
fn test_live_hours_clamp_to_shift() {
    let entry = log("14:00", "22:30", 30, 0, 100, 20);

    // mid-shift: 4 elapsed hours minus the 30 min break
    assert_eq!(metrics::hours_worked_at(&entry, t("18:00")), 3.5);

    // after the logged end the clock stops at the shift end
    assert_eq!(metrics::hours_worked_at(&entry, t("23:00")), 8.0);

    // before the shift starts nothing has been worked
    assert_eq!(metrics::hours_worked_at(&entry, t("13:00")), 0.0);
}

#[test]
fn test_live_metrics_use_elapsed_hours() {
    let entry = log("14:00", "22:30", 30, 0, 100, 20);
    let tgt = target(6.0, 10.0, 4.0);

    let m = metrics::live_metrics(&entry, &tgt, t("18:00"));
    assert_eq!(m.hours_worked, 3.5);
    assert_eq!(m.units_completed, 15.0);
    approx(m.units_per_hour, 15.0 / 3.5);
    assert_eq!(m.required_units, 21.0);
    approx(m.remaining_units, 6.0);
}

#[test]
fn test_projection_behind_pace() {
    // pace 15/3.5 ≈ 4.29 UPH against a 6.0 goal: cannot make it
    let entry = log("14:00", "22:30", 30, 0, 100, 20);
    let tgt = target(6.0, 10.0, 4.0);

    match metrics::project_schedule(&entry, &tgt, t("18:00")) {
        SchedulePace::Behind {
            projected_units,
            shortfall,
        } => {
            let pace = 15.0 / 3.5;
            approx(projected_units, 15.0 + pace * 4.5);
            approx(shortfall, 48.0 - (15.0 + pace * 4.5));
        }
        other => panic!("expected Behind, got {:?}", other),
    }
}

#[test]
fn test_projection_on_pace_reports_crossing_time() {
    // 280 docs -> 28 units in 3.5 h: pace 8.0 >= 6.0; 20 more units
    // at that pace land 2.5 h later
    let entry = log("14:00", "22:30", 30, 0, 280, 0);
    let tgt = target(6.0, 10.0, 4.0);

    assert_eq!(
        metrics::project_schedule(&entry, &tgt, t("18:00")),
        SchedulePace::Met { at: t("20:30") }
    );
}

#[test]
fn test_projection_goal_already_crossed() {
    // 50 units done against 48 required: crossed ~8 minutes ago
    let entry = log("14:00", "22:30", 30, 0, 500, 0);
    let tgt = target(6.0, 10.0, 4.0);

    match metrics::project_schedule(&entry, &tgt, t("18:00")) {
        SchedulePace::Met { at } => assert!(at < t("18:00")),
        other => panic!("expected Met, got {:?}", other),
    }
}

#[test]
fn test_projection_zero_pace_is_behind() {
    let entry = log("14:00", "22:30", 30, 0, 0, 0);
    let tgt = target(6.0, 10.0, 4.0);

    assert_eq!(
        metrics::project_schedule(&entry, &tgt, t("18:00")),
        SchedulePace::Behind {
            projected_units: 0.0,
            shortfall: 48.0
        }
    );
}
