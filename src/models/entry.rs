use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_between, minutes_to_hours};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One work-log record per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogEntry {
    pub id: i64,
    pub date: NaiveDate,        // ⇔ work_logs.date (TEXT "YYYY-MM-DD", UNIQUE)
    pub start_time: NaiveTime,  // ⇔ work_logs.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,    // ⇔ work_logs.end_time (TEXT "HH:MM")
    pub break_minutes: i64,     // ⇔ work_logs.break_minutes (INT, default 0)
    pub training_minutes: i64,  // ⇔ work_logs.training_minutes (INT, default 0)
    pub docs_completed: i64,    // ⇔ work_logs.docs_completed (INT, default 0)
    pub videos_completed: i64,  // ⇔ work_logs.videos_completed (INT, default 0)
    pub notes: String,          // ⇔ work_logs.notes (TEXT, default '')
    pub target_id: Option<i64>, // ⇔ work_logs.target_id (INT NULL, target active when recorded)
    pub created_at: String,     // ⇔ work_logs.created_at (TEXT, ISO8601)
}

impl WorkLogEntry {
    /// High-level constructor for entries created from the CLI.
    /// - `id = 0` marks a row not yet persisted
    /// - `created_at = now()` in ISO8601
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_minutes: i64,
        training_minutes: i64,
        docs_completed: i64,
        videos_completed: i64,
        notes: String,
        target_id: Option<i64>,
    ) -> Self {
        Self {
            id: 0,
            date,
            start_time,
            end_time,
            break_minutes,
            training_minutes,
            docs_completed,
            videos_completed,
            notes,
            target_id,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M").to_string()
    }

    /// Net scheduled minutes: (end − start) − break − training.
    pub fn net_minutes(&self) -> i64 {
        minutes_between(self.start_time, self.end_time) - self.break_minutes - self.training_minutes
    }

    /// Net hours worked over the full scheduled shift.
    pub fn hours_worked(&self) -> f64 {
        minutes_to_hours(self.net_minutes())
    }

    /// Form-level validation, run before any write reaches the store.
    pub fn validate(&self) -> AppResult<()> {
        if self.end_time <= self.start_time {
            return Err(AppError::Validation(format!(
                "end time {} must be later than start time {}",
                self.end_str(),
                self.start_str()
            )));
        }
        if self.break_minutes < 0 || self.training_minutes < 0 {
            return Err(AppError::Validation(
                "break and training minutes cannot be negative".into(),
            ));
        }
        if self.net_minutes() <= 0 {
            return Err(AppError::Validation(format!(
                "net hours worked must be positive ({} − {} leaves {} min after breaks)",
                self.end_str(),
                self.start_str(),
                self.net_minutes()
            )));
        }
        if self.docs_completed < 0 || self.videos_completed < 0 {
            return Err(AppError::Validation(
                "completed counts cannot be negative".into(),
            ));
        }
        Ok(())
    }
}
