use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A named Units-Per-Hour productivity goal.
///
/// The per-unit divisors define the conversion rule: how many completed
/// documents, and how many completed video sessions, make up one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UphTarget {
    pub id: i64,
    pub name: String,         // ⇔ targets.name (TEXT, UNIQUE, user-facing)
    pub target_uph: f64,      // ⇔ targets.target_uph (REAL, units/hour)
    pub docs_per_unit: f64,   // ⇔ targets.docs_per_unit (REAL, > 0)
    pub videos_per_unit: f64, // ⇔ targets.videos_per_unit (REAL, > 0)
    pub is_active: bool,      // ⇔ targets.is_active (INT 0/1, at most one row set)
    pub created_at: String,   // ⇔ targets.created_at (TEXT, ISO8601)
}

impl UphTarget {
    pub fn new(name: String, target_uph: f64, docs_per_unit: f64, videos_per_unit: f64) -> Self {
        Self {
            id: 0,
            name,
            target_uph,
            docs_per_unit,
            videos_per_unit,
            is_active: false,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("target name cannot be empty".into()));
        }
        if !(self.target_uph.is_finite() && self.target_uph > 0.0) {
            return Err(AppError::Validation(format!(
                "target rate must be positive (got {})",
                self.target_uph
            )));
        }
        if !(self.docs_per_unit.is_finite() && self.docs_per_unit > 0.0) {
            return Err(AppError::Validation(format!(
                "docs-per-unit must be positive (got {})",
                self.docs_per_unit
            )));
        }
        if !(self.videos_per_unit.is_finite() && self.videos_per_unit > 0.0) {
            return Err(AppError::Validation(format!(
                "videos-per-unit must be positive (got {})",
                self.videos_per_unit
            )));
        }
        Ok(())
    }
}
