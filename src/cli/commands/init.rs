use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::spots::SpotTable;
use crate::ui::messages::success;

/// Initialize the configuration and an empty spot table.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    // Creates the N-spot table on first load if it does not exist yet.
    let table = SpotTable::new(cfg.spots_file(), cfg.capacity);
    table.load()?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }
    success(format!(
        "Spot table:  {} ({} spots)",
        cfg.spots_file().display(),
        cfg.capacity
    ));
    success(format!("Ledger:      {}", cfg.history_file().display()));

    Ok(())
}
