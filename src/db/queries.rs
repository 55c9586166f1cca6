use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkLogEntry;
use crate::models::settings::UserSettings;
use crate::models::target::UphTarget;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ----------------------------------------------------------------------------
// Row mapping
// ----------------------------------------------------------------------------

fn text_conversion_err(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_db_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| text_conversion_err(AppError::InvalidDate(s.to_string())))
}

fn parse_db_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| text_conversion_err(AppError::InvalidTime(s.to_string())))
}

pub fn map_log_row(row: &Row) -> Result<WorkLogEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    Ok(WorkLogEntry {
        id: row.get("id")?,
        date: parse_db_date(&date_str)?,
        start_time: parse_db_time(&start_str)?,
        end_time: parse_db_time(&end_str)?,
        break_minutes: row.get("break_minutes")?,
        training_minutes: row.get("training_minutes")?,
        docs_completed: row.get("docs_completed")?,
        videos_completed: row.get("videos_completed")?,
        notes: row.get("notes")?,
        target_id: row.get("target_id")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_target_row(row: &Row) -> Result<UphTarget> {
    Ok(UphTarget {
        id: row.get("id")?,
        name: row.get("name")?,
        target_uph: row.get("target_uph")?,
        docs_per_unit: row.get("docs_per_unit")?,
        videos_per_unit: row.get("videos_per_unit")?,
        is_active: row.get::<_, i64>("is_active")? == 1,
        created_at: row.get("created_at")?,
    })
}

fn map_settings_row(row: &Row) -> Result<UserSettings> {
    let start_str: String = row.get("default_start")?;
    let end_str: String = row.get("default_end")?;

    Ok(UserSettings {
        default_start: parse_db_time(&start_str)?,
        default_end: parse_db_time(&end_str)?,
        default_break_minutes: row.get("default_break_minutes")?,
        auto_switch_target: row.get::<_, i64>("auto_switch_target")? == 1,
        updated_at: row.get("updated_at")?,
    })
}

// ----------------------------------------------------------------------------
// Work logs
// ----------------------------------------------------------------------------

pub fn load_logs(pool: &mut DbPool) -> AppResult<Vec<WorkLogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM work_logs
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Logs with `date` inside the inclusive bounds, oldest first.
pub fn load_logs_between(
    pool: &mut DbPool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<WorkLogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM work_logs
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let start_str = start.format("%Y-%m-%d").to_string();
    let end_str = end.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![start_str, end_str], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_log_by_date(pool: &mut DbPool, date: NaiveDate) -> AppResult<Option<WorkLogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM work_logs
         WHERE date = ?1",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let found = stmt.query_row([date_str], map_log_row).optional()?;
    Ok(found)
}

pub fn insert_log(conn: &Connection, entry: &WorkLogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_logs (date, start_time, end_time, break_minutes, training_minutes,
                                docs_completed, videos_completed, notes, target_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.break_minutes,
            entry.training_minutes,
            entry.docs_completed,
            entry.videos_completed,
            entry.notes,
            entry.target_id,
            entry.created_at,
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::DuplicateDate(entry.date_str())
        }
        other => AppError::Db(other),
    })?;

    Ok(conn.last_insert_rowid())
}

pub fn update_log(conn: &Connection, entry: &WorkLogEntry) -> AppResult<()> {
    conn.execute(
        "UPDATE work_logs
         SET date = ?1, start_time = ?2, end_time = ?3, break_minutes = ?4,
             training_minutes = ?5, docs_completed = ?6, videos_completed = ?7,
             notes = ?8, target_id = ?9
         WHERE id = ?10",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.break_minutes,
            entry.training_minutes,
            entry.docs_completed,
            entry.videos_completed,
            entry.notes,
            entry.target_id,
            entry.id,
        ],
    )?;
    Ok(())
}

pub fn find_log_by_id(conn: &Connection, id: i64) -> AppResult<Option<WorkLogEntry>> {
    let mut stmt = conn.prepare("SELECT * FROM work_logs WHERE id = ?1")?;
    let found = stmt.query_row([id], map_log_row).optional()?;
    Ok(found)
}

pub fn delete_log(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM work_logs WHERE id = ?1", [id])?;
    Ok(())
}

// ----------------------------------------------------------------------------
// Targets
// ----------------------------------------------------------------------------

pub fn load_targets(pool: &mut DbPool) -> AppResult<Vec<UphTarget>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM targets
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_target_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_target_by_name(pool: &mut DbPool, name: &str) -> AppResult<Option<UphTarget>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM targets
         WHERE name = ?1",
    )?;
    let found = stmt.query_row([name], map_target_row).optional()?;
    Ok(found)
}

pub fn find_target_by_id(conn: &Connection, id: i64) -> AppResult<Option<UphTarget>> {
    let mut stmt = conn.prepare("SELECT * FROM targets WHERE id = ?1")?;
    let found = stmt.query_row([id], map_target_row).optional()?;
    Ok(found)
}

/// The single active target, if any.
pub fn active_target(pool: &mut DbPool) -> AppResult<Option<UphTarget>> {
    active_target_on(&pool.conn)
}

/// Same lookup against a bare connection (usable inside a transaction).
pub fn active_target_on(conn: &Connection) -> AppResult<Option<UphTarget>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM targets
         WHERE is_active = 1
         LIMIT 1",
    )?;
    let found = stmt.query_row([], map_target_row).optional()?;
    Ok(found)
}

pub fn count_targets(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM targets", [], |row| row.get(0))?;
    Ok(count)
}

pub fn insert_target(conn: &Connection, target: &UphTarget) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO targets (name, target_uph, docs_per_unit, videos_per_unit, is_active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            target.name,
            target.target_uph,
            target.docs_per_unit,
            target.videos_per_unit,
            if target.is_active { 1 } else { 0 },
            target.created_at,
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::Validation(format!("a target named '{}' already exists", target.name))
        }
        other => AppError::Db(other),
    })?;

    Ok(conn.last_insert_rowid())
}

pub fn update_target(conn: &Connection, target: &UphTarget) -> AppResult<()> {
    conn.execute(
        "UPDATE targets
         SET name = ?1, target_uph = ?2, docs_per_unit = ?3, videos_per_unit = ?4
         WHERE id = ?5",
        params![
            target.name,
            target.target_uph,
            target.docs_per_unit,
            target.videos_per_unit,
            target.id,
        ],
    )?;
    Ok(())
}

pub fn delete_target(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM targets WHERE id = ?1", [id])?;
    Ok(())
}

/// How many work logs reference a target (shown before deletion).
pub fn count_logs_for_target(conn: &Connection, id: i64) -> AppResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM work_logs WHERE target_id = ?1",
        [id],
        |row| row.get(0),
    )?;
    Ok(count)
}

// ----------------------------------------------------------------------------
// Settings singleton
// ----------------------------------------------------------------------------

pub fn load_settings(conn: &Connection) -> AppResult<Option<UserSettings>> {
    let mut stmt = conn.prepare("SELECT * FROM settings WHERE id = 1")?;
    let found = stmt.query_row([], map_settings_row).optional()?;
    Ok(found)
}

pub fn save_settings(conn: &Connection, settings: &UserSettings) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (id, default_start, default_end, default_break_minutes,
                               auto_switch_target, updated_at)
         VALUES (1, ?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             default_start = excluded.default_start,
             default_end = excluded.default_end,
             default_break_minutes = excluded.default_break_minutes,
             auto_switch_target = excluded.auto_switch_target,
             updated_at = excluded.updated_at",
        params![
            settings.start_str(),
            settings.end_str(),
            settings.default_break_minutes,
            if settings.auto_switch_target { 1 } else { 0 },
            settings.updated_at,
        ],
    )?;
    Ok(())
}
