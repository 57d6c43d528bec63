use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::ParkingService;
use crate::errors::{AppError, AppResult};
use crate::models::history::{OwnerHistory, PlateHistory};
use crate::ui::messages::header;

/// Display cap on the unique-value lists. The stores return unbounded
/// results; only the rendering is capped.
pub const DISPLAY_CAP: usize = 10;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { owner, plate } = cmd {
        let service = ParkingService::new(cfg);

        match (owner, plate) {
            (Some(name), None) => {
                let history = service.search_by_owner(name)?;
                print_owner_history(name, &history);
            }
            (None, Some(plate)) => {
                let history = service.search_by_plate(plate)?;
                print_plate_history(plate, &history);
            }
            _ => {
                return Err(AppError::Other(
                    "search requires exactly one of --owner or --plate".to_string(),
                ));
            }
        }
    }
    Ok(())
}

pub fn print_owner_history(name: &str, history: &OwnerHistory) {
    header(format!("HISTORY FOR OWNER '{}'", name));
    println!("Total times parked: {}", history.total_entries);
    println!("Unique vehicles:    {}", history.plates.len());

    if !history.plates.is_empty() {
        println!("License plates used:");
        print_capped(&history.plates);
    }
}

pub fn print_plate_history(plate: &str, history: &PlateHistory) {
    header(format!("HISTORY FOR PLATE '{}'", plate));
    println!("Total entries:     {}", history.total_entries);
    println!("Registered owners: {}", history.owners.len());

    if !history.owners.is_empty() {
        println!("Owners:");
        print_capped(&history.owners);
    }
}

fn print_capped(items: &[String]) {
    for (i, item) in items.iter().take(DISPLAY_CAP).enumerate() {
        println!("  {}. {}", i + 1, item);
    }
    if items.len() > DISPLAY_CAP {
        println!("  ... and {} more", items.len() - DISPLAY_CAP);
    }
}
