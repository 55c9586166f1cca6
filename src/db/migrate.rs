//! Versioned schema migrations.
//!
//! `run_pending_migrations` is the only entry point; `init` and
//! `db --migrate` both route through it. Applied migrations are marked
//! by system rows in the audit trail, and a legacy schema triggers a
//! compressed safety backup before any ALTER runs.

use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::models::settings::UserSettings;
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, params};

const MIGRATION_ADD_TRAINING: &str = "20250601_0001_add_training_minutes";

/// Ensure that the `audit_log` table exists with the modern schema.
/// It must exist first: migration markers live in it.
fn ensure_audit_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS audit_log (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp  TEXT NOT NULL,
            action     TEXT NOT NULL CHECK(action IN ('create','update','delete','activate','system')),
            entity     TEXT NOT NULL CHECK(entity IN ('work_log','target','settings','system')),
            entity_key TEXT NOT NULL DEFAULT '',
            before     TEXT,
            after      TEXT,
            message    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_audit_timestamp ON audit_log(timestamp);
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Whether the core schema has ever been created in this database.
pub fn is_initialized(conn: &Connection) -> AppResult<bool> {
    table_exists(conn, "work_logs")
}

/// Check if the `work_logs` table has a `training_minutes` column.
fn work_logs_has_training_column(conn: &Connection) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('work_logs')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "training_minutes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `work_logs` table with the modern schema (including
/// `training_minutes`).
fn create_work_logs_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_logs (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            date             TEXT NOT NULL,
            start_time       TEXT NOT NULL,
            end_time         TEXT NOT NULL,
            break_minutes    INTEGER NOT NULL DEFAULT 0,
            training_minutes INTEGER NOT NULL DEFAULT 0,
            docs_completed   INTEGER NOT NULL DEFAULT 0,
            videos_completed INTEGER NOT NULL DEFAULT 0,
            notes            TEXT NOT NULL DEFAULT '',
            target_id        INTEGER,
            created_at       TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_work_logs_date ON work_logs(date);
        "#,
    )?;
    Ok(())
}

fn create_targets_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS targets (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            target_uph      REAL NOT NULL,
            docs_per_unit   REAL NOT NULL,
            videos_per_unit REAL NOT NULL,
            is_active       INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_targets_name ON targets(name);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_targets_active ON targets(is_active) WHERE is_active = 1;
        "#,
    )?;
    Ok(())
}

/// Create the settings singleton table and seed the default row.
fn create_settings_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            id                    INTEGER PRIMARY KEY CHECK(id = 1),
            default_start         TEXT NOT NULL,
            default_end           TEXT NOT NULL,
            default_break_minutes INTEGER NOT NULL DEFAULT 30,
            auto_switch_target    INTEGER NOT NULL DEFAULT 0,
            updated_at            TEXT NOT NULL
        );
        "#,
    )?;

    let defaults = UserSettings::default();
    conn.execute(
        "INSERT OR IGNORE INTO settings (id, default_start, default_end,
                                         default_break_minutes, auto_switch_target, updated_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)",
        params![
            defaults.start_str(),
            defaults.end_str(),
            defaults.default_break_minutes,
            if defaults.auto_switch_target { 1 } else { 0 },
            defaults.updated_at,
        ],
    )?;
    Ok(())
}

/// Add `training_minutes` to a pre-existing `work_logs` table, gated by
/// a migration marker in the audit trail.
fn migrate_add_training_column(conn: &Connection) -> AppResult<()> {
    if audit::has_system_marker(conn, MIGRATION_ADD_TRAINING)? {
        return Ok(());
    }

    if !work_logs_has_training_column(conn)? {
        warning("Adding 'training_minutes' column to work_logs table...");

        conn.execute(
            "ALTER TABLE work_logs ADD COLUMN training_minutes INTEGER NOT NULL DEFAULT 0;",
            [],
        )
        .map_err(|e| {
            AppError::Migration(format!("Failed to add 'training_minutes' column: {}", e))
        })?;
    }

    audit::record_system(
        conn,
        MIGRATION_ADD_TRAINING,
        "Added training_minutes column to work_logs",
    )?;

    success(format!(
        "Migration applied: {} → added 'training_minutes' to work_logs table",
        MIGRATION_ADD_TRAINING
    ));

    Ok(())
}

/// Zip the database file next to itself, tagged with `label`
/// (e.g. `pre_migration`, `pre_restore`).
pub(crate) fn safety_backup(db_path: &str, label: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        label
    );

    let backup_path = match std::path::Path::new(db_path).parent() {
        Some(parent) => parent.join(&backup_name),
        None => std::path::PathBuf::from(&backup_name),
    };

    let file = File::create(&backup_path)
        .map_err(|e| AppError::Other(format!("Backup failed (create): {}", e)))?;

    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Other(format!("Backup failed (start_file): {}", e)))?;

    let db_content = fs::read(db_path)
        .map_err(|e| AppError::Other(format!("Backup failed (read): {}", e)))?;

    zip.write_all(&db_content)
        .map_err(|e| AppError::Other(format!("Backup failed (write_all): {}", e)))?;

    zip.finish()
        .map_err(|e| AppError::Other(format!("Backup failed (finish): {}", e)))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Bring the schema fully up to date, creating missing tables on the way.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure audit table (markers live there)
    ensure_audit_table(conn)?;

    // 2) Inspect current schema
    let logs_exist = table_exists(conn, "work_logs")?;
    let logs_have_training = if logs_exist {
        work_logs_has_training_column(conn)?
    } else {
        false
    };

    // 3) Detect legacy schema (pre training_minutes)
    let is_legacy_schema = logs_exist && !logs_have_training;

    // 4) Legacy schemas get a safety backup before any ALTER runs
    if is_legacy_schema {
        warning("Legacy schema detected: taking a safety backup before migrating...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            safety_backup(&db_path, "pre_migration")?;
        } else {
            warning("Could not resolve the database path, backup skipped.");
        }
    }

    // 5) Create or upgrade the work_logs table
    if !logs_exist {
        create_work_logs_table(conn)?;
        audit::record_system(conn, "schema", "Created work_logs table (modern schema)")?;
    } else if !logs_have_training {
        migrate_add_training_column(conn)?;
    }

    // One entry per calendar day, enforced by the schema itself. Legacy
    // tables predate the index, so it is ensured on every run.
    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_work_logs_date ON work_logs(date);",
    )?;

    // 6) Targets and settings singleton
    create_targets_table(conn)?;
    create_settings_table(conn)?;

    Ok(())
}
