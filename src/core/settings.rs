use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::settings::UserSettings;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::mins2readable;
use chrono::NaiveTime;

/// High-level business logic for the `settings` command.
pub struct SettingsLogic;

impl SettingsLogic {
    pub fn show(store: &mut dyn Store) -> AppResult<()> {
        let s = store.load_settings()?;

        println!();
        println!("{}• Default start:{} {}", CYAN, RESET, s.start_str());
        println!("{}• Default end:{} {}", CYAN, RESET, s.end_str());
        println!(
            "{}• Default break:{} {} ({} min)",
            CYAN,
            RESET,
            mins2readable(s.default_break_minutes, false, false),
            s.default_break_minutes
        );
        println!(
            "{}• Auto-switch target:{} {}",
            CYAN,
            RESET,
            if s.auto_switch_target { "on" } else { "off" }
        );
        println!();
        Ok(())
    }

    /// Merge provided values over the stored singleton and save.
    pub fn update(
        store: &mut dyn Store,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
        break_minutes: Option<i64>,
        auto_switch: Option<bool>,
    ) -> AppResult<()> {
        let old = store.load_settings()?;

        let settings = UserSettings {
            default_start: start.unwrap_or(old.default_start),
            default_end: end.unwrap_or(old.default_end),
            default_break_minutes: break_minutes.unwrap_or(old.default_break_minutes),
            auto_switch_target: auto_switch.unwrap_or(old.auto_switch_target),
            updated_at: old.updated_at,
        };

        store.save_settings(settings)?;
        success("Settings updated");
        Ok(())
    }
}
