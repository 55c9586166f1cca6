use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

/// Per-user defaults, stored as a singleton row in the database.
///
/// These are the values the `add` command falls back to when a flag is
/// omitted; `auto_switch_target` makes recording an entry against a
/// non-active target activate that target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub default_start: NaiveTime,   // ⇔ settings.default_start (TEXT "HH:MM")
    pub default_end: NaiveTime,     // ⇔ settings.default_end (TEXT "HH:MM")
    pub default_break_minutes: i64, // ⇔ settings.default_break_minutes (INT)
    pub auto_switch_target: bool,   // ⇔ settings.auto_switch_target (INT 0/1)
    pub updated_at: String,         // ⇔ settings.updated_at (TEXT, ISO8601)
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            default_end: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            default_break_minutes: 30,
            auto_switch_target: false,
            updated_at: Local::now().to_rfc3339(),
        }
    }
}

impl UserSettings {
    pub fn start_str(&self) -> String {
        self.default_start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.default_end.format("%H:%M").to_string()
    }
}
