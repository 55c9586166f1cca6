use serde::Serialize;
use serde_json::Value;

/// What a mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Activate,
    System,
}

impl AuditAction {
    /// Storage form, also shown in the audit table.
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::Activate => "activate",
            AuditAction::System => "system",
        }
    }

    /// Inverse of [`Self::to_db_str`].
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "create" => Some(AuditAction::Create),
            "update" => Some(AuditAction::Update),
            "delete" => Some(AuditAction::Delete),
            "activate" => Some(AuditAction::Activate),
            "system" => Some(AuditAction::System),
            _ => None,
        }
    }

    /// Case-insensitive form for CLI filter values.
    pub fn from_code(code: &str) -> Option<Self> {
        AuditAction::from_db_str(&code.to_lowercase())
    }
}

/// What kind of record the mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditEntity {
    WorkLog,
    Target,
    Settings,
    System,
}

impl AuditEntity {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AuditEntity::WorkLog => "work_log",
            AuditEntity::Target => "target",
            AuditEntity::Settings => "settings",
            AuditEntity::System => "system",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work_log" => Some(AuditEntity::WorkLog),
            "target" => Some(AuditEntity::Target),
            "settings" => Some(AuditEntity::Settings),
            "system" => Some(AuditEntity::System),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        AuditEntity::from_db_str(&code.to_lowercase())
    }
}

/// An immutable, append-only record of one mutation (or system event),
/// with before/after snapshots of the touched record for traceability.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogEntry {
    pub id: i64,
    pub timestamp: String, // ⇔ audit_log.timestamp (TEXT, ISO8601; append-only ordering)
    pub action: AuditAction,
    pub entity: AuditEntity,
    pub entity_key: String, // date for work logs, name for targets, version for system events
    pub before: Option<Value>,
    pub after: Option<Value>,
    pub message: String,
}
