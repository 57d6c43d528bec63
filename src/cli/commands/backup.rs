use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        backup(cfg, file, *compress)?;
    }
    Ok(())
}

/// Copy both tables to `dest`. With `compress` the destination is a single
/// zip archive; otherwise it is a directory receiving plain copies.
pub fn backup(cfg: &Config, dest: &str, compress: bool) -> AppResult<()> {
    let spots = cfg.spots_file();
    let history = cfg.history_file();

    if !spots.exists() {
        return Err(AppError::Storage(format!(
            "spot table not found: {} (run 'carpark init' first)",
            spots.display()
        )));
    }

    // The ledger may legitimately not exist yet (no check-ins recorded).
    let mut sources = vec![spots];
    if history.exists() {
        sources.push(history);
    }

    let dest = Path::new(dest);

    if compress {
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        if dest.exists() && !confirm_overwrite(dest)? {
            warning("Backup cancelled by user.");
            return Ok(());
        }

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        for src in &sources {
            let options: FileOptions<'_, ()> =
                FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            let name = src
                .file_name()
                .ok_or_else(|| AppError::Other(format!("bad source path: {}", src.display())))?
                .to_string_lossy()
                .to_string();
            zip.start_file(name, options).map_err(io::Error::other)?;
            let mut f = fs::File::open(src)?;
            io::copy(&mut f, &mut zip)?;
        }
        zip.finish().map_err(io::Error::other)?;

        success(format!("Compressed backup created: {}", dest.display()));
    } else {
        fs::create_dir_all(dest)?;
        for src in &sources {
            let name = src
                .file_name()
                .ok_or_else(|| AppError::Other(format!("bad source path: {}", src.display())))?;
            fs::copy(src, dest.join(name))?;
        }
        success(format!("Backup created in: {}", dest.display()));
    }

    Ok(())
}

fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
