use super::{entry::WorkLogEntry, settings::UserSettings, target::UphTarget};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// The whole application state as a single interchange document:
/// all entries, all targets, the settings singleton.
///
/// This is the backup/restore format, and the path records take when
/// moving between storage backends. The audit trail is not part of the
/// document; a restore is itself an audited event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub exported_at: String,
    pub entries: Vec<WorkLogEntry>,
    pub targets: Vec<UphTarget>,
    pub settings: UserSettings,
}

impl AppState {
    pub fn new(entries: Vec<WorkLogEntry>, targets: Vec<UphTarget>, settings: UserSettings) -> Self {
        Self {
            exported_at: Local::now().to_rfc3339(),
            entries,
            targets,
            settings,
        }
    }
}
