use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::service::ParkingService;
use crate::errors::{AppError, AppResult};
use crate::models::receipt::Receipt;
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::{format_fee, secs2readable};
use crate::utils::time::{format_epoch, now_epoch};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout { plate } = cmd {
        let service = ParkingService::new(cfg);
        let receipt = service.check_out(plate, now_epoch())?;
        print_receipt(&receipt, cfg);
    }
    Ok(())
}

/// Print the checkout receipt; shared with the menu UI.
pub fn print_receipt(receipt: &Receipt, cfg: &Config) {
    header("RECEIPT");
    success(format!(
        "Car '{}' released from spot {}",
        receipt.plate, receipt.spot_id
    ));
    println!("Entry time: {}", format_epoch(receipt.entry_time));
    println!("Exit time:  {}", format_epoch(receipt.exit_time));
    println!(
        "Duration:   {} ({} s)",
        secs2readable(receipt.duration_secs),
        receipt.duration_secs
    );
    println!(
        "Total fee:  {} ({} {}/sec)",
        format_fee(receipt.fee, &cfg.currency),
        cfg.currency,
        cfg.rate_per_second
    );

    if !receipt.ledger_amended {
        warning(AppError::LedgerInconsistency(format!(
            "no open session found for plate '{}'; the spot was freed but the history was not amended",
            receipt.plate
        )));
    }
}
