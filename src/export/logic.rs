// src/export/logic.rs

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::range::parse_range;
use crate::export::{csv, json, notify_export_success};
use crate::models::state::AppState;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

use chrono::NaiveDate;
use std::io;

/// Punto di ingresso dell'export verso CSV e JSON.
pub struct ExportLogic;

impl ExportLogic {
    /// Esporta i work log nel formato richiesto.
    ///
    /// - `file`: destinazione, path assoluto
    /// - `range`: `None` o `"all"` per tutto, altrimenti un periodo
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) o un intervallo `inizio:fine`
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(&path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = match date_bounds {
            None => queries::load_logs(pool)?,
            Some((start, end)) => queries::load_logs_between(pool, start, end)?,
        };

        if entries.is_empty() {
            warning("⚠️  No work logs found for selected range.");
            return Ok(());
        }

        let targets = queries::load_targets(pool)?;

        match format {
            ExportFormat::Csv => {
                csv::write_csv(&path, &entries, &targets, cfg.decimal_places)?;
                notify_export_success("CSV", &path);
            }
            ExportFormat::Json => {
                let settings = queries::load_settings(&pool.conn)?.unwrap_or_default();
                let state = AppState::new(entries, targets, settings);
                json::write_state(&path, &state)?;
                notify_export_success("JSON", &path);
            }
        }

        Ok(())
    }
}
