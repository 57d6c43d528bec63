use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::ParkingService;
use crate::errors::AppResult;
use crate::export;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let service = ParkingService::new(cfg);
        let sessions = service.ledger().load_all()?;
        export::write_sessions(format, Path::new(file), &sessions, *force)?;
    }
    Ok(())
}
