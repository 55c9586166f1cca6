use crate::config::Config;
use crate::core::listview;
use crate::core::metrics::{self, SchedulePace};
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{CYAN, GREEN, RED, RESET, color_for_pace, color_for_remaining};
use crate::utils::date::today;
use crate::utils::formatting::{format_hours, format_uph};
use chrono::{Local, NaiveDate, NaiveTime};

/// High-level business logic for the `status` command: the day's
/// dashboard of derived metrics and the schedule projection.
pub struct StatusLogic;

impl StatusLogic {
    pub fn apply(
        store: &mut dyn Store,
        cfg: &Config,
        date: Option<NaiveDate>,
        at: Option<NaiveTime>,
        target_name: Option<String>,
    ) -> AppResult<()> {
        let date = date.unwrap_or_else(today);
        let date_str = date.format("%Y-%m-%d").to_string();

        let entry = store
            .find_entry_by_date(date)?
            .ok_or(AppError::NoEntryForDate(date_str))?;

        let target = match &target_name {
            Some(name) => Some(
                store
                    .find_target_by_name(name)?
                    .ok_or_else(|| AppError::TargetNotFound(name.clone()))?,
            ),
            None => {
                let targets = store.list_targets()?;
                listview::resolve_target(&entry, &targets).cloned()
            }
        };

        // Reference clock: --at wins, today runs live, past days are
        // reported over the full shift.
        let now = at.or_else(|| (date == today()).then(|| Local::now().time()));

        header(format!("Status for {}", entry.date_str()));
        println!(
            "{}• Shift:{} {} → {} (break {} min, training {} min)",
            CYAN,
            RESET,
            entry.start_str(),
            entry.end_str(),
            entry.break_minutes,
            entry.training_minutes
        );
        println!(
            "{}• Completed:{} {} docs, {} videos",
            CYAN, RESET, entry.docs_completed, entry.videos_completed
        );

        let Some(target) = target else {
            warning("No target to measure against. Create one with 'target add'.");
            return Ok(());
        };

        let d = cfg.decimal_places;
        println!(
            "{}• Target:{} '{}' at {} UPH (1 unit = {} docs or {} videos)",
            CYAN,
            RESET,
            target.name,
            format_uph(target.target_uph, d),
            format_uph(target.docs_per_unit, d),
            format_uph(target.videos_per_unit, d)
        );

        let in_progress = now.is_some_and(|n| n < entry.end_time);
        let m = match now {
            Some(n) if in_progress => metrics::live_metrics(&entry, &target, n),
            _ => metrics::day_metrics(&entry, &target),
        };

        let suffix = if in_progress { " (so far)" } else { "" };
        println!(
            "{}• Hours worked:{} {}{}",
            CYAN,
            RESET,
            format_hours(m.hours_worked, d),
            suffix
        );
        println!(
            "{}• Units completed:{} {}",
            CYAN,
            RESET,
            format_uph(m.units_completed, d)
        );

        let pace_color = color_for_pace(m.units_per_hour, target.target_uph);
        println!(
            "{}• Pace:{} {}{} UPH{}",
            CYAN,
            RESET,
            pace_color,
            format_uph(m.units_per_hour, d),
            RESET
        );
        println!(
            "{}• Required{}:{} {}",
            CYAN, suffix, RESET,
            format_uph(m.required_units, d)
        );

        let rem_color = color_for_remaining(m.remaining_units);
        println!(
            "{}• Remaining{}:{} {}{}{}",
            CYAN,
            suffix,
            RESET,
            rem_color,
            format_uph(m.remaining_units, d),
            RESET
        );

        // ------------------------------------------------
        // Schedule projection (only while the shift runs)
        // ------------------------------------------------
        if in_progress
            && let Some(n) = now
        {
            match metrics::project_schedule(&entry, &target, n) {
                SchedulePace::Met { at } => {
                    let when = at.format("%H:%M");
                    if at <= n {
                        println!(
                            "{}• Schedule:{} {}day goal reached at {}{}",
                            CYAN, RESET, GREEN, when, RESET
                        );
                    } else {
                        println!(
                            "{}• Schedule:{} {}on pace, day goal projected by {}{}",
                            CYAN, RESET, GREEN, when, RESET
                        );
                    }
                }
                SchedulePace::Behind {
                    projected_units,
                    shortfall,
                } => {
                    println!(
                        "{}• Schedule:{} {}behind pace, projected {} units by shift end (short {}){}",
                        CYAN,
                        RESET,
                        RED,
                        format_uph(projected_units, d),
                        format_uph(shortfall, d),
                        RESET
                    );
                }
            }
        } else if m.remaining_units <= 0.0 {
            println!(
                "{}• Result:{} {}goal met with {} units to spare{}",
                CYAN,
                RESET,
                GREEN,
                format_uph(-m.remaining_units, d),
                RESET
            );
        } else {
            println!(
                "{}• Result:{} {}goal missed by {} units{}",
                CYAN,
                RESET,
                RED,
                format_uph(m.remaining_units, d),
                RESET
            );
        }

        println!();
        Ok(())
    }
}
