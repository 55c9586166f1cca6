use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, at, target } = cmd {
        let d = match date {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
            }
            None => None,
        };
        let at = parse_optional_time(at.as_ref())?;

        let mut store = SqliteStore::open(&cfg.database)?;
        StatusLogic::apply(&mut store, cfg, d, at, target.clone())?;
    }

    Ok(())
}
