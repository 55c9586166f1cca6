use crate::cli::parser::{Commands, TargetCommands};
use crate::config::Config;
use crate::core::targets::TargetLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Target { command } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        match command {
            TargetCommands::Add {
                name,
                uph,
                docs_per_unit,
                videos_per_unit,
            } => TargetLogic::add(&mut store, name.clone(), *uph, *docs_per_unit, *videos_per_unit)?,

            TargetCommands::Edit {
                name,
                rename,
                uph,
                docs_per_unit,
                videos_per_unit,
            } => TargetLogic::edit(
                &mut store,
                name,
                rename.clone(),
                *uph,
                *docs_per_unit,
                *videos_per_unit,
            )?,

            TargetCommands::Del { name } => TargetLogic::del(&mut store, name)?,

            TargetCommands::List => TargetLogic::list(&mut store, cfg)?,

            TargetCommands::SetActive { name } => TargetLogic::set_active(&mut store, name)?,
        }
    }

    Ok(())
}
