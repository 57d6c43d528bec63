use crate::models::session::Session;
use std::path::Path;

/// Write sessions as pretty-printed JSON.
pub fn write_json(path: &Path, sessions: &[Session]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(sessions).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}
