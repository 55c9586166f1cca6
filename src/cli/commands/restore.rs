use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::restore::RestoreLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, force } = cmd {
        if !*force {
            let prompt = format!(
                "Restore '{}' into the current database? Existing records with the same date or name will be overwritten.",
                file
            );
            if !ask_confirmation(&prompt) {
                info("Restore cancelled.");
                return Ok(());
            }
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        RestoreLogic::apply(&mut store, cfg, file)?;
    }

    Ok(())
}
