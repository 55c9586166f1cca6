use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        show,
        start,
        end,
        break_minutes,
        auto_switch,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;

        let has_update =
            start.is_some() || end.is_some() || break_minutes.is_some() || auto_switch.is_some();

        if has_update {
            let start = parse_optional_time(start.as_ref())?;
            let end = parse_optional_time(end.as_ref())?;
            let auto = match auto_switch.as_deref() {
                Some("on") => Some(true),
                Some("off") => Some(false),
                Some(other) => {
                    return Err(AppError::Validation(format!(
                        "--auto-switch takes 'on' or 'off', got '{}'",
                        other
                    )));
                }
                None => None,
            };

            SettingsLogic::update(&mut store, start, end, *break_minutes, auto)?;
        }

        // Plain `settings` (or an explicit --show) prints the singleton.
        if *show || !has_update {
            SettingsLogic::show(&mut store)?;
        }
    }

    Ok(())
}
