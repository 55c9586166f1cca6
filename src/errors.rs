//! Application-wide error type.
//! Every layer (db, core, cli, export) speaks AppError, so `?` carries
//! failures from the store all the way up to the command handlers.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    // ---------------------------
    // User input parsing
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid audit filter: {0}")]
    InvalidAuditFilter(String),

    // ---------------------------
    // Validation errors (rejected before persistence)
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("An entry for {0} already exists")]
    DuplicateDate(String),

    // ---------------------------
    // Invariant violations (rejected by the store)
    // ---------------------------
    #[error("No entry found for date {0}")]
    NoEntryForDate(String),

    #[error("Target not found: {0}")]
    TargetNotFound(String),

    #[error("Target '{0}' is the active target and cannot be deleted")]
    ActiveTargetDelete(String),

    // ---------------------------
    // Export / restore errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Restore error: {0}")]
    Restore(String),

    // ---------------------------
    // Fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
