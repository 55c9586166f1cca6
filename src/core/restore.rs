//! Bulk import of a JSON state document into the live database.
//!
//! Doubles as the one-time migration path from another storage backend:
//! every record in the document is upserted (entries keyed by date,
//! targets by name), so restoring into a non-empty database merges
//! rather than duplicates. The current DB is zipped first.

use crate::config::Config;
use crate::db::audit;
use crate::db::migrate::safety_backup;
use crate::db::store::{SqliteStore, Store};
use crate::errors::{AppError, AppResult};
use crate::export::json::read_state;
use crate::models::entry::WorkLogEntry;
use crate::models::state::AppState;
use crate::models::target::UphTarget;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::collections::HashMap;
use std::path::Path;

pub struct RestoreLogic;

impl RestoreLogic {
    pub fn apply(store: &mut SqliteStore, cfg: &Config, file: &str) -> AppResult<()> {
        // 1️⃣ Read and validate the document before touching the DB
        let state = read_state(&expand_tilde(file))?;
        validate_state(&state)?;

        // 2️⃣ Safety backup of the current database
        if Path::new(&cfg.database).exists() {
            safety_backup(&cfg.database, "pre_restore")?;
        }

        // 3️⃣ Upsert targets first, mapping document ids to stored ids
        let mut id_map: HashMap<i64, i64> = HashMap::new();
        for doc in &state.targets {
            let stored = match store.find_target_by_name(&doc.name)? {
                Some(existing) => store.upsert_target(UphTarget {
                    id: existing.id,
                    name: existing.name.clone(),
                    target_uph: doc.target_uph,
                    docs_per_unit: doc.docs_per_unit,
                    videos_per_unit: doc.videos_per_unit,
                    is_active: existing.is_active,
                    created_at: existing.created_at.clone(),
                })?,
                None => store.upsert_target(UphTarget {
                    id: 0,
                    is_active: false,
                    ..doc.clone()
                })?,
            };
            id_map.insert(doc.id, stored.id);
        }

        // 4️⃣ The active flag follows the document
        if let Some(doc_active) = state.targets.iter().find(|t| t.is_active) {
            let new_id = id_map[&doc_active.id];
            let current = store.active_target()?;
            if current.map(|c| c.id) != Some(new_id) {
                store.set_active_target(new_id)?;
            }
        }

        // 5️⃣ Upsert work logs with remapped target references
        for doc in &state.entries {
            store.upsert_entry(WorkLogEntry {
                id: 0,
                target_id: doc.target_id.map(|old| id_map[&old]),
                notes: doc.notes.clone(),
                created_at: doc.created_at.clone(),
                ..*doc
            })?;
        }

        // 6️⃣ Settings singleton
        store.save_settings(state.settings.clone())?;

        // 7️⃣ Log in DB
        audit::record_system(
            &store.pool.conn,
            file,
            &format!(
                "Restored {} work logs and {} targets from state document",
                state.entries.len(),
                state.targets.len()
            ),
        )?;

        success(format!(
            "Restore completed: {} work logs and {} targets merged from {}",
            state.entries.len(),
            state.targets.len(),
            file
        ));

        Ok(())
    }
}

/// Reject an internally inconsistent document before any write happens.
fn validate_state(state: &AppState) -> AppResult<()> {
    for target in &state.targets {
        target.validate()?;
    }

    for entry in &state.entries {
        entry.validate()?;

        if let Some(id) = entry.target_id
            && !state.targets.iter().any(|t| t.id == id)
        {
            return Err(AppError::Restore(format!(
                "work log {} references unknown target id {}",
                entry.date_str(),
                id
            )));
        }
    }

    Ok(())
}
