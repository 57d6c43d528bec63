//! Cross-store consistency scan.
//!
//! The spot table and the ledger are written in sequence, not in a
//! transaction, so a crash between the two writes (or a hand-edited file)
//! can leave them disagreeing. This scan reports every disagreement; it
//! never mutates either store.

use crate::core::service::ParkingService;
use crate::errors::AppResult;
use crate::store::spots::SpotTable;

/// One reconciliation finding, already rendered for the operator.
pub fn scan(service: &ParkingService) -> AppResult<Vec<String>> {
    let spots = service.spot_table().load()?;
    let sessions = service.ledger().load_all()?;

    let mut findings = Vec::new();

    // Occupied spots with no open session for their plate.
    for spot in spots.iter().filter(|s| s.occupied) {
        let open = sessions
            .iter()
            .any(|sess| sess.is_open() && sess.plate.eq_ignore_ascii_case(&spot.plate));
        if !open {
            findings.push(format!(
                "spot {} holds plate '{}' but the ledger has no open session for it",
                spot.id, spot.plate
            ));
        }
    }

    // Open sessions whose spot is free or holds a different plate.
    for sess in sessions.iter().filter(|s| s.is_open()) {
        match SpotTable::find_by_id(&spots, sess.spot_id) {
            Some(spot) if spot.holds_plate(&sess.plate) => {}
            Some(spot) if spot.occupied => findings.push(format!(
                "open session for plate '{}' names spot {}, which holds plate '{}'",
                sess.plate, sess.spot_id, spot.plate
            )),
            Some(_) => findings.push(format!(
                "open session for plate '{}' names spot {}, which is empty",
                sess.plate, sess.spot_id
            )),
            None => findings.push(format!(
                "open session for plate '{}' names unknown spot {}",
                sess.plate, sess.spot_id
            )),
        }
    }

    Ok(findings)
}
