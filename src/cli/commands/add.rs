use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        start,
        end,
        break_minutes,
        training_minutes,
        docs,
        videos,
        notes,
        target,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let mut store = SqliteStore::open(&cfg.database)?;

        AddLogic::apply(
            &mut store,
            cfg,
            d,
            start,
            end,
            *break_minutes,
            *training_minutes,
            *docs,
            *videos,
            notes.clone(),
            target.clone(),
        )?;
    }

    Ok(())
}
