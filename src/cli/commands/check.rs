use crate::config::Config;
use crate::core::{reconcile, service::ParkingService};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Run the cross-store reconciliation scan and print every finding.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = ParkingService::new(cfg);
    let findings = reconcile::scan(&service)?;

    if findings.is_empty() {
        success("Spot table and ledger are consistent");
    } else {
        for finding in &findings {
            warning(finding);
        }
        println!("\n{} inconsistency(ies) found", findings.len());
    }
    Ok(())
}
