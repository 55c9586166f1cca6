use crate::config::Config;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::target::UphTarget;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{GREEN, RESET};
use crate::utils::formatting::format_uph;
use crate::utils::table::Table;

/// High-level business logic for the `target` subcommands.
pub struct TargetLogic;

impl TargetLogic {
    /// Create a new named target. Names are unique; editing goes
    /// through `edit`.
    pub fn add(
        store: &mut dyn Store,
        name: String,
        target_uph: f64,
        docs_per_unit: f64,
        videos_per_unit: f64,
    ) -> AppResult<()> {
        if store.find_target_by_name(&name)?.is_some() {
            return Err(AppError::Validation(format!(
                "a target named '{}' already exists (use 'target edit')",
                name
            )));
        }

        let target = UphTarget::new(name, target_uph, docs_per_unit, videos_per_unit);
        target.validate()?;

        let saved = store.upsert_target(target)?;
        if saved.is_active {
            success(format!(
                "Target '{}' created and activated ({} UPH)",
                saved.name, saved.target_uph
            ));
        } else {
            success(format!(
                "Target '{}' created ({} UPH)",
                saved.name, saved.target_uph
            ));
        }
        Ok(())
    }

    /// Update an existing target; `None` keeps the stored value.
    pub fn edit(
        store: &mut dyn Store,
        name: &str,
        rename: Option<String>,
        target_uph: Option<f64>,
        docs_per_unit: Option<f64>,
        videos_per_unit: Option<f64>,
    ) -> AppResult<()> {
        let old = store
            .find_target_by_name(name)?
            .ok_or_else(|| AppError::TargetNotFound(name.to_string()))?;

        if let Some(new_name) = &rename
            && new_name != name
            && store.find_target_by_name(new_name)?.is_some()
        {
            return Err(AppError::Validation(format!(
                "a target named '{}' already exists",
                new_name
            )));
        }

        let target = UphTarget {
            name: rename.unwrap_or(old.name.clone()),
            target_uph: target_uph.unwrap_or(old.target_uph),
            docs_per_unit: docs_per_unit.unwrap_or(old.docs_per_unit),
            videos_per_unit: videos_per_unit.unwrap_or(old.videos_per_unit),
            ..old
        };
        target.validate()?;

        let saved = store.upsert_target(target)?;
        success(format!("Target '{}' updated", saved.name));
        Ok(())
    }

    /// Delete a target by name. The store rejects the active one.
    pub fn del(store: &mut dyn Store, name: &str) -> AppResult<()> {
        let target = store
            .find_target_by_name(name)?
            .ok_or_else(|| AppError::TargetNotFound(name.to_string()))?;

        let referencing = store.count_entries_for_target(target.id)?;
        store.delete_target(target.id)?;

        success(format!("Target '{}' deleted", name));
        if referencing > 0 {
            warning(format!(
                "{} work logs still reference '{}' and now fall back to the active target",
                referencing, name
            ));
        }
        Ok(())
    }

    /// Make `name` the single active target.
    pub fn set_active(store: &mut dyn Store, name: &str) -> AppResult<()> {
        let target = store
            .find_target_by_name(name)?
            .ok_or_else(|| AppError::TargetNotFound(name.to_string()))?;

        let activated = store.set_active_target(target.id)?;
        success(format!("Active target is now '{}'", activated.name));
        Ok(())
    }

    /// Render all targets as a table, the active one marked.
    pub fn list(store: &mut dyn Store, cfg: &Config) -> AppResult<()> {
        let targets = store.list_targets()?;

        if targets.is_empty() {
            println!("No targets defined. Create one with 'target add'.");
            return Ok(());
        }

        let d = cfg.decimal_places;
        let mut table = Table::new(vec![
            "Active", "Name", "UPH", "Docs/unit", "Videos/unit", "Created",
        ]);

        for t in &targets {
            let active = if t.is_active { "✓" } else { "" };
            let created = t.created_at.get(..10).unwrap_or(&t.created_at);
            table.add_row(vec![
                active.to_string(),
                t.name.clone(),
                format_uph(t.target_uph, d),
                format_uph(t.docs_per_unit, d),
                format_uph(t.videos_per_unit, d),
                created.to_string(),
            ]);
        }

        print!("{}", table.render());

        if let Some(active) = targets.iter().find(|t| t.is_active) {
            println!("\n{}Active target: {}{}", GREEN, active.name, RESET);
        }
        Ok(())
    }
}
