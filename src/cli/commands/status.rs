use crate::config::Config;
use crate::core::service::ParkingService;
use crate::errors::AppResult;
use crate::models::spot::Spot;
use crate::store::spots::SpotTable;
use crate::ui::messages::header;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = ParkingService::new(cfg);
    let spots = service.status()?;
    render(&spots);
    Ok(())
}

/// Render the spot grid, ten per row: free spots show their number in
/// green, occupied spots show a red `[ X ]`. Shared with the menu UI.
pub fn render(spots: &[Spot]) {
    header("PARKING STATUS");

    for row in spots.chunks(10) {
        let mut line = String::new();
        for spot in row {
            if spot.occupied {
                line.push_str(&format!("{}[ X ]{} ", RED, RESET));
            } else {
                line.push_str(&format!("{}[{:3}]{} ", GREEN, spot.id, RESET));
            }
        }
        println!("{}", line.trim_end());
    }

    println!(
        "\nCars parked: {} / {}",
        SpotTable::count_occupied(spots),
        spots.len()
    );
}
