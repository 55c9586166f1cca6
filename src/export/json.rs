use crate::errors::{AppError, AppResult};
use crate::models::state::AppState;
use std::path::Path;

/// Scrive lo stato completo dell'applicazione in JSON formattato.
pub fn write_state(path: &Path, state: &AppState) -> AppResult<()> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Rilegge uno stato esportato (usato da `restore`).
pub fn read_state(path: &Path) -> AppResult<AppState> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Restore(format!("invalid state document: {}", e)))
}
