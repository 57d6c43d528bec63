mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::{info, success, warning};
use clap::ValueEnum;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the full session history to `path` in the requested format.
pub fn write_sessions(
    format: &ExportFormat,
    path: &Path,
    sessions: &[Session],
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, sessions)?,
        ExportFormat::Json => json::write_json(path, sessions)?,
    }

    success(format!(
        "{} export completed: {} ({} sessions)",
        format.as_str().to_uppercase(),
        path.display(),
        sessions.len()
    ));
    Ok(())
}

/// Check whether a file may be created or overwritten.
///
/// Missing file or `force` → Ok; otherwise ask the operator.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}
