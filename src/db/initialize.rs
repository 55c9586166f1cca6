use crate::db::migrate::{is_initialized, run_pending_migrations};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database, returning `true` when the schema was
/// created from scratch (first run).
/// Schema creation and upgrades both go through the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<bool> {
    let fresh = !is_initialized(conn)?;

    run_pending_migrations(conn)?;
    Ok(fresh)
}
