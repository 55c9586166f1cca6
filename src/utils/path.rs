use std::path::PathBuf;

/// Expand a leading `~/` in user-supplied file arguments (backup,
/// restore and export destinations). Shells normally do this, but the
/// path reaches us verbatim when quoted.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
