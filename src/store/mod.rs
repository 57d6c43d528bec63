pub mod ledger;
pub mod spots;

use crate::errors::AppResult;
use std::fs;
use std::path::Path;
use std::process;

/// Atomically replace `path` with `contents`: write a sibling temp file,
/// then rename over the target so no partial table is ever observable.
/// The temp name carries the process id so an unrelated sibling file is
/// never clobbered.
pub(crate) fn atomic_write(path: &Path, contents: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension(format!("tmp.{}", process::id()));
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
