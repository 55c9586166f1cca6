//! Storage abstraction over the persistence backend.
//!
//! The trait is the whole contract the application core has with
//! storage: list, upsert (create if no id/date/name match, else update
//! in place), delete, activate, plus the settings singleton and the
//! audit trail. `SqliteStore` is the one shipped backend; every
//! mutation it performs also appends an audit row.

use crate::db::audit::{self, snap};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::audit::{AuditAction, AuditEntity, AuditLogEntry};
use crate::models::entry::WorkLogEntry;
use crate::models::settings::UserSettings;
use crate::models::target::UphTarget;
use chrono::{Local, NaiveDate};

pub trait Store {
    // Work logs
    fn list_entries(&mut self) -> AppResult<Vec<WorkLogEntry>>;
    fn find_entry_by_date(&mut self, date: NaiveDate) -> AppResult<Option<WorkLogEntry>>;
    fn upsert_entry(&mut self, entry: WorkLogEntry) -> AppResult<WorkLogEntry>;
    fn delete_entry(&mut self, id: i64) -> AppResult<()>;
    /// Number of work logs recorded against a target.
    fn count_entries_for_target(&mut self, id: i64) -> AppResult<i64>;

    // Targets
    fn list_targets(&mut self) -> AppResult<Vec<UphTarget>>;
    fn find_target_by_name(&mut self, name: &str) -> AppResult<Option<UphTarget>>;
    fn active_target(&mut self) -> AppResult<Option<UphTarget>>;
    fn upsert_target(&mut self, target: UphTarget) -> AppResult<UphTarget>;
    /// Rejected for the currently active target.
    fn delete_target(&mut self, id: i64) -> AppResult<()>;
    /// Atomically deactivates every other target.
    fn set_active_target(&mut self, id: i64) -> AppResult<UphTarget>;

    // Settings singleton
    fn load_settings(&mut self) -> AppResult<UserSettings>;
    fn save_settings(&mut self, settings: UserSettings) -> AppResult<UserSettings>;

    // Audit trail (read side; writes happen inside the mutations above)
    fn list_audit(&mut self) -> AppResult<Vec<AuditLogEntry>>;
}

pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Ok(Self { pool })
    }
}

impl Store for SqliteStore {
    fn list_entries(&mut self) -> AppResult<Vec<WorkLogEntry>> {
        queries::load_logs(&mut self.pool)
    }

    fn find_entry_by_date(&mut self, date: NaiveDate) -> AppResult<Option<WorkLogEntry>> {
        queries::find_log_by_date(&mut self.pool, date)
    }

    fn upsert_entry(&mut self, mut entry: WorkLogEntry) -> AppResult<WorkLogEntry> {
        // Match by id first, then by date (one entry per calendar day).
        let existing = if entry.id != 0 {
            queries::find_log_by_id(&self.pool.conn, entry.id)?
        } else {
            queries::find_log_by_date(&mut self.pool, entry.date)?
        };

        match existing {
            Some(old) => {
                entry.id = old.id;
                entry.created_at = old.created_at.clone();
                queries::update_log(&self.pool.conn, &entry)?;
                audit::record(
                    &self.pool.conn,
                    AuditAction::Update,
                    AuditEntity::WorkLog,
                    &entry.date_str(),
                    Some(snap(&old)?),
                    Some(snap(&entry)?),
                    &format!("Updated work log for {}", entry.date_str()),
                )?;
            }
            None => {
                entry.id = queries::insert_log(&self.pool.conn, &entry)?;
                audit::record(
                    &self.pool.conn,
                    AuditAction::Create,
                    AuditEntity::WorkLog,
                    &entry.date_str(),
                    None,
                    Some(snap(&entry)?),
                    &format!("Created work log for {}", entry.date_str()),
                )?;
            }
        }

        Ok(entry)
    }

    fn count_entries_for_target(&mut self, id: i64) -> AppResult<i64> {
        queries::count_logs_for_target(&self.pool.conn, id)
    }

    fn delete_entry(&mut self, id: i64) -> AppResult<()> {
        let old = queries::find_log_by_id(&self.pool.conn, id)?
            .ok_or_else(|| AppError::Other(format!("work log id {} not found", id)))?;

        queries::delete_log(&self.pool.conn, id)?;
        audit::record(
            &self.pool.conn,
            AuditAction::Delete,
            AuditEntity::WorkLog,
            &old.date_str(),
            Some(snap(&old)?),
            None,
            &format!("Deleted work log for {}", old.date_str()),
        )?;
        Ok(())
    }

    fn list_targets(&mut self) -> AppResult<Vec<UphTarget>> {
        queries::load_targets(&mut self.pool)
    }

    fn find_target_by_name(&mut self, name: &str) -> AppResult<Option<UphTarget>> {
        queries::find_target_by_name(&mut self.pool, name)
    }

    fn active_target(&mut self) -> AppResult<Option<UphTarget>> {
        queries::active_target(&mut self.pool)
    }

    fn upsert_target(&mut self, mut target: UphTarget) -> AppResult<UphTarget> {
        let existing = if target.id != 0 {
            queries::find_target_by_id(&self.pool.conn, target.id)?
        } else {
            queries::find_target_by_name(&mut self.pool, &target.name)?
        };

        match existing {
            Some(old) => {
                target.id = old.id;
                target.is_active = old.is_active;
                target.created_at = old.created_at.clone();
                queries::update_target(&self.pool.conn, &target)?;
                audit::record(
                    &self.pool.conn,
                    AuditAction::Update,
                    AuditEntity::Target,
                    &target.name,
                    Some(snap(&old)?),
                    Some(snap(&target)?),
                    &format!("Updated target '{}'", target.name),
                )?;
            }
            None => {
                // The very first target becomes active right away so
                // metrics have a rate to run against.
                let first = queries::count_targets(&self.pool.conn)? == 0;
                target.is_active = first;
                target.id = queries::insert_target(&self.pool.conn, &target)?;
                let message = if first {
                    format!("Created target '{}' (activated as first target)", target.name)
                } else {
                    format!("Created target '{}'", target.name)
                };
                audit::record(
                    &self.pool.conn,
                    AuditAction::Create,
                    AuditEntity::Target,
                    &target.name,
                    None,
                    Some(snap(&target)?),
                    &message,
                )?;
            }
        }

        Ok(target)
    }

    fn delete_target(&mut self, id: i64) -> AppResult<()> {
        let old = queries::find_target_by_id(&self.pool.conn, id)?
            .ok_or_else(|| AppError::TargetNotFound(format!("id {}", id)))?;

        if old.is_active {
            return Err(AppError::ActiveTargetDelete(old.name));
        }

        queries::delete_target(&self.pool.conn, id)?;
        audit::record(
            &self.pool.conn,
            AuditAction::Delete,
            AuditEntity::Target,
            &old.name,
            Some(snap(&old)?),
            None,
            &format!("Deleted target '{}'", old.name),
        )?;
        Ok(())
    }

    fn set_active_target(&mut self, id: i64) -> AppResult<UphTarget> {
        let tx = self.pool.conn.transaction()?;

        let mut target = queries::find_target_by_id(&tx, id)?
            .ok_or_else(|| AppError::TargetNotFound(format!("id {}", id)))?;
        let previous = queries::active_target_on(&tx)?;

        // Deactivate first: a partial unique index allows at most one
        // active row at any time.
        tx.execute("UPDATE targets SET is_active = 0 WHERE is_active = 1", [])?;
        tx.execute("UPDATE targets SET is_active = 1 WHERE id = ?1", [id])?;

        target.is_active = true;
        audit::record(
            &tx,
            AuditAction::Activate,
            AuditEntity::Target,
            &target.name,
            previous.as_ref().map(snap).transpose()?,
            Some(snap(&target)?),
            &format!("Activated target '{}'", target.name),
        )?;

        tx.commit()?;
        Ok(target)
    }

    fn load_settings(&mut self) -> AppResult<UserSettings> {
        Ok(queries::load_settings(&self.pool.conn)?.unwrap_or_default())
    }

    fn save_settings(&mut self, mut settings: UserSettings) -> AppResult<UserSettings> {
        let old = queries::load_settings(&self.pool.conn)?;
        settings.updated_at = Local::now().to_rfc3339();

        queries::save_settings(&self.pool.conn, &settings)?;
        audit::record(
            &self.pool.conn,
            AuditAction::Update,
            AuditEntity::Settings,
            "settings",
            old.as_ref().map(snap).transpose()?,
            Some(snap(&settings)?),
            "Updated user settings",
        )?;
        Ok(settings)
    }

    fn list_audit(&mut self) -> AppResult<Vec<AuditLogEntry>> {
        audit::load_audit(&self.pool.conn)
    }
}
