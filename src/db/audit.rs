//! Append-only audit trail.
//!
//! Every mutation and system event writes one row here, with JSON
//! snapshots of the record before and after the change. Rows are never
//! updated or deleted.

use crate::errors::{AppError, AppResult};
use crate::models::audit::{AuditAction, AuditEntity, AuditLogEntry};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde_json::Value;

/// Capture a record as a JSON snapshot for the `before`/`after` columns.
pub fn snap<T: Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::Other(format!("snapshot serialization failed: {}", e)))
}

/// Write one audit row. `entity_key` identifies the record in
/// user-facing terms (entry date, target name, file path).
pub fn record(
    conn: &Connection,
    action: AuditAction,
    entity: AuditEntity,
    entity_key: &str,
    before: Option<Value>,
    after: Option<Value>,
    message: &str,
) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO audit_log (timestamp, action, entity, entity_key, before, after, message)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;

    stmt.execute(params![
        now,
        action.to_db_str(),
        entity.to_db_str(),
        entity_key,
        before.map(|v| v.to_string()),
        after.map(|v| v.to_string()),
        message,
    ])?;

    Ok(())
}

/// System events (init, migrations, backup, restore) have no record
/// snapshots.
pub fn record_system(conn: &Connection, entity_key: &str, message: &str) -> AppResult<()> {
    record(
        conn,
        AuditAction::System,
        AuditEntity::System,
        entity_key,
        None,
        None,
        message,
    )
}

pub fn map_row(row: &rusqlite::Row) -> rusqlite::Result<AuditLogEntry> {
    let action_str: String = row.get("action")?;
    let entity_str: String = row.get("entity")?;

    let parse_json = |s: Option<String>| s.and_then(|s| serde_json::from_str(&s).ok());

    Ok(AuditLogEntry {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        action: AuditAction::from_db_str(&action_str).unwrap_or(AuditAction::System),
        entity: AuditEntity::from_db_str(&entity_str).unwrap_or(AuditEntity::System),
        entity_key: row.get("entity_key")?,
        before: parse_json(row.get("before")?),
        after: parse_json(row.get("after")?),
        message: row.get("message")?,
    })
}

/// Load the whole trail, oldest first; the view layer re-orders.
pub fn load_audit(conn: &Connection) -> AppResult<Vec<AuditLogEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp, action, entity, entity_key, before, after, message
         FROM audit_log
         ORDER BY timestamp ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Check whether a system marker (applied migration) has been written.
pub fn has_system_marker(conn: &Connection, entity_key: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM audit_log
         WHERE entity = 'system' AND entity_key = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([entity_key], |_| Ok(())).optional()?.is_some())
}
