use crate::config::Config;
use crate::core::metrics;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkLogEntry;
use crate::models::target::UphTarget;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::format_uph;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command (create and update).
pub struct AddLogic;

impl AddLogic {
    /// Upsert the work log for one calendar day.
    ///
    /// A `None` argument means "not given on the command line": on a new
    /// entry it falls back to the stored defaults, on an existing entry
    /// it keeps the recorded value. Only provided flags overwrite.
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        store: &mut dyn Store,
        cfg: &Config,
        date: NaiveDate,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        break_minutes: Option<i64>,
        training_minutes: Option<i64>,
        docs: Option<i64>,
        videos: Option<i64>,
        notes: Option<String>,
        target_name: Option<String>,
    ) -> AppResult<()> {
        let settings = store.load_settings()?;
        let existing = store.find_entry_by_date(date)?;
        let is_update = existing.is_some();

        // ------------------------------------------------
        // 1️⃣ Resolve the target the entry records against
        // ------------------------------------------------
        let explicit_target = match &target_name {
            Some(name) => Some(
                store
                    .find_target_by_name(name)?
                    .ok_or_else(|| AppError::TargetNotFound(name.clone()))?,
            ),
            None => None,
        };

        // ------------------------------------------------
        // 2️⃣ Merge flags over the existing entry or the defaults
        // ------------------------------------------------
        let entry = match existing {
            Some(old) => WorkLogEntry {
                start_time: start.unwrap_or(old.start_time),
                end_time: end.unwrap_or(old.end_time),
                break_minutes: break_minutes.unwrap_or(old.break_minutes),
                training_minutes: training_minutes.unwrap_or(old.training_minutes),
                docs_completed: docs.unwrap_or(old.docs_completed),
                videos_completed: videos.unwrap_or(old.videos_completed),
                notes: notes.unwrap_or(old.notes.clone()),
                target_id: explicit_target.as_ref().map(|t| t.id).or(old.target_id),
                ..old
            },
            None => {
                let target_id = match &explicit_target {
                    Some(t) => Some(t.id),
                    None => store.active_target()?.map(|t| t.id),
                };
                WorkLogEntry::new(
                    date,
                    start.unwrap_or(settings.default_start),
                    end.unwrap_or(settings.default_end),
                    break_minutes.unwrap_or(settings.default_break_minutes),
                    training_minutes.unwrap_or(0),
                    docs.unwrap_or(0),
                    videos.unwrap_or(0),
                    notes.unwrap_or_default(),
                    target_id,
                )
            }
        };

        entry.validate()?;

        // ------------------------------------------------
        // 3️⃣ Persist
        // ------------------------------------------------
        let saved = store.upsert_entry(entry)?;

        if is_update {
            success(format!("✏️ Work log updated for {}", saved.date_str()));
        } else {
            success(format!("Work log added for {}", saved.date_str()));
        }

        // ------------------------------------------------
        // 4️⃣ Auto-switch the active target if the feature is on
        // ------------------------------------------------
        if settings.auto_switch_target
            && let Some(t) = &explicit_target
            && !t.is_active
        {
            store.set_active_target(t.id)?;
            info(format!("🎯 Active target switched to '{}'", t.name));
        }

        // ------------------------------------------------
        // 5️⃣ Metrics summary for the saved day
        // ------------------------------------------------
        match Self::target_for(store, &saved)? {
            Some(target) => {
                let m = metrics::day_metrics(&saved, &target);
                let d = cfg.decimal_places;
                info(format!(
                    "{} h worked, {} units at {} UPH (target '{}': {} required, {} remaining)",
                    format_uph(m.hours_worked, d),
                    format_uph(m.units_completed, d),
                    format_uph(m.units_per_hour, d),
                    target.name,
                    format_uph(m.required_units, d),
                    format_uph(m.remaining_units, d),
                ));
            }
            None => {
                warning("No target defined yet: metrics unavailable. Create one with 'target add'.");
            }
        }

        Ok(())
    }

    /// The target a saved entry computes its metrics against: the
    /// recorded reference, else the active target.
    fn target_for(store: &mut dyn Store, entry: &WorkLogEntry) -> AppResult<Option<UphTarget>> {
        let targets = store.list_targets()?;
        Ok(crate::core::listview::resolve_target(entry, &targets).cloned())
    }
}
