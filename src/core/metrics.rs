//! Derived productivity metrics.
//!
//! Every function here is pure and total: wall-clock time is always an
//! explicit argument, and bad input (zero divisors, zero hours) yields 0
//! or a sentinel instead of an error, because these run on every refresh.

use crate::models::entry::WorkLogEntry;
use crate::models::target::UphTarget;
use crate::utils::time::{minutes_between, minutes_to_hours};
use chrono::{Duration, NaiveTime};

/// The full set of derived numbers for one entry against one target.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayMetrics {
    pub hours_worked: f64,
    pub units_completed: f64,
    pub units_per_hour: f64,
    pub required_units: f64,
    pub remaining_units: f64,
}

/// Where the day stands against the target rate, projected linearly
/// from the pace held so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulePace {
    /// On or ahead of the rate: the day goal is (or will be) reached
    /// within the shift. `at` is the clock time the threshold was, or
    /// will be, crossed.
    Met { at: NaiveTime },
    /// Below the rate: the goal cannot be reached before the scheduled
    /// end. Carries the units projected by shift end and the shortfall
    /// against the day goal.
    Behind { projected_units: f64, shortfall: f64 },
}

fn unit_term(count: i64, per_unit: f64) -> f64 {
    if per_unit.is_finite() && per_unit > 0.0 {
        count as f64 / per_unit
    } else {
        0.0
    }
}

/// Units completed = docs/docs_per_unit + videos/videos_per_unit.
/// A zero (or unusable) divisor makes that term contribute 0.
pub fn units_completed(log: &WorkLogEntry, target: &UphTarget) -> f64 {
    unit_term(log.docs_completed, target.docs_per_unit)
        + unit_term(log.videos_completed, target.videos_per_unit)
}

/// Units per hour over the full scheduled shift; 0 when no positive
/// hours were worked.
pub fn units_per_hour(log: &WorkLogEntry, target: &UphTarget) -> f64 {
    uph_for_hours(units_completed(log, target), log.hours_worked())
}

fn uph_for_hours(units: f64, hours: f64) -> f64 {
    if hours > 0.0 { units / hours } else { 0.0 }
}

/// Units the target rate demands for the given hours.
pub fn required_units(hours_worked: f64, target_rate: f64) -> f64 {
    hours_worked * target_rate
}

/// Required minus completed: positive = behind goal, zero or negative =
/// goal met or exceeded.
pub fn remaining_units(log: &WorkLogEntry, target: &UphTarget) -> f64 {
    required_units(log.hours_worked(), target.target_uph) - units_completed(log, target)
}

fn metrics_for_hours(log: &WorkLogEntry, target: &UphTarget, hours: f64) -> DayMetrics {
    let units = units_completed(log, target);
    let required = required_units(hours, target.target_uph);
    DayMetrics {
        hours_worked: hours,
        units_completed: units,
        units_per_hour: uph_for_hours(units, hours),
        required_units: required,
        remaining_units: required - units,
    }
}

/// Metrics over the entry's full scheduled shift (a completed day).
pub fn day_metrics(log: &WorkLogEntry, target: &UphTarget) -> DayMetrics {
    metrics_for_hours(log, target, log.hours_worked())
}

/// Net hours worked so far, using `now` in place of the logged end time.
/// Elapsed time clamps to be non-negative and never runs past the
/// entry's configured end time.
pub fn hours_worked_at(log: &WorkLogEntry, now: NaiveTime) -> f64 {
    let effective_end = now.min(log.end_time);
    let elapsed =
        minutes_between(log.start_time, effective_end) - log.break_minutes - log.training_minutes;
    minutes_to_hours(elapsed.max(0))
}

/// Live snapshot for an in-progress entry: the same numbers as
/// [`day_metrics`], recomputed against `now` instead of the logged end.
pub fn live_metrics(log: &WorkLogEntry, target: &UphTarget, now: NaiveTime) -> DayMetrics {
    metrics_for_hours(log, target, hours_worked_at(log, now))
}

/// Estimate the clock time at which the day's cumulative target is met,
/// extrapolating the pace held so far.
///
/// Pace at or above the target rate means the goal falls inside the
/// shift, so the crossing timestamp is reported (in the past once the
/// threshold has been crossed). Below the rate, the goal would land
/// past the shift end, which is reported as a shortfall instead of a
/// nonsensical late timestamp.
pub fn project_schedule(log: &WorkLogEntry, target: &UphTarget, now: NaiveTime) -> SchedulePace {
    let live = live_metrics(log, target, now);
    let goal = required_units(log.hours_worked(), target.target_uph);
    let done = live.units_completed;
    let pace = live.units_per_hour;

    if goal <= done {
        // Already crossed; walk back along the current pace to the
        // moment the goal was reached.
        let at = if pace > 0.0 {
            clock_offset(now, (goal - done) / pace)
        } else {
            now
        };
        return SchedulePace::Met {
            at: clamp_to_shift(at, log),
        };
    }

    if pace >= target.target_uph && pace > 0.0 {
        let at = clock_offset(now, (goal - done) / pace);
        return SchedulePace::Met {
            at: clamp_to_shift(at, log),
        };
    }

    let remaining_hours = (log.hours_worked() - live.hours_worked).max(0.0);
    let projected = done + pace * remaining_hours;
    SchedulePace::Behind {
        projected_units: projected,
        shortfall: goal - projected,
    }
}

fn clock_offset(now: NaiveTime, hours: f64) -> NaiveTime {
    let minutes = (hours * 60.0).round() as i64;
    if minutes >= 0 {
        now + Duration::minutes(minutes)
    } else {
        now - Duration::minutes(-minutes)
    }
}

fn clamp_to_shift(t: NaiveTime, log: &WorkLogEntry) -> NaiveTime {
    t.clamp(log.start_time, log.end_time)
}
