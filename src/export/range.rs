// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::period_bounds;
use chrono::NaiveDate;
use std::io;

/// Interpreta il valore di --range (anno, mese, giorno o intervallo).
///
/// Formati accettati: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, oppure
/// `inizio:fine` con lo stesso formato su entrambi i lati.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::from(io::Error::other(
                "start and end must have same format",
            )));
        }

        let (d1, _) = period_bounds(start).map_err(|e| AppError::from(io::Error::other(e)))?;
        let (_, d2) = period_bounds(end).map_err(|e| AppError::from(io::Error::other(e)))?;

        if d2 < d1 {
            return Err(AppError::from(io::Error::other(
                "range end is before range start",
            )));
        }

        Ok((d1, d2))
    } else {
        period_bounds(r).map_err(|e| AppError::from(io::Error::other(e)))
    }
}
