use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::ParkingService;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_epoch, now_epoch};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        name,
        plate,
        phone,
        address,
        spot,
    } = cmd
    {
        let service = ParkingService::new(cfg);
        let session = service.check_in(name, plate, phone, address, *spot, now_epoch())?;

        success(format!(
            "Car '{}' checked in to spot {} at {}",
            session.plate,
            session.spot_id,
            format_epoch(session.entry_time)
        ));
    }
    Ok(())
}
