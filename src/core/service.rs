//! ParkingService: the orchestration core.
//!
//! Owns every spot state transition (`Empty → Occupied → Empty`, nothing
//! else) and keeps the spot table and the history ledger describing the
//! same logical event. The stores themselves are passive.

use crate::config::Config;
use crate::core::fees::compute_fee;
use crate::errors::{AppError, AppResult};
use crate::models::history::{OwnerHistory, PlateHistory};
use crate::models::receipt::Receipt;
use crate::models::session::Session;
use crate::models::spot::Spot;
use crate::store::ledger::HistoryLedger;
use crate::store::spots::SpotTable;

pub struct ParkingService {
    spots: SpotTable,
    ledger: HistoryLedger,
    rate_per_second: f64,
}

impl ParkingService {
    pub fn new(cfg: &Config) -> Self {
        Self {
            spots: SpotTable::new(cfg.spots_file(), cfg.capacity),
            ledger: HistoryLedger::new(cfg.history_file()),
            rate_per_second: cfg.rate_per_second,
        }
    }

    pub fn from_parts(spots: SpotTable, ledger: HistoryLedger, rate_per_second: f64) -> Self {
        Self {
            spots,
            ledger,
            rate_per_second,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.spots.capacity()
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn spot_table(&self) -> &SpotTable {
        &self.spots
    }

    /// Check a vehicle in. `now` is the entry timestamp (epoch seconds).
    ///
    /// Persists the spot table first, then appends the open session. If the
    /// table write succeeds and the ledger append fails the error propagates
    /// as-is: there is no transaction log to roll back with, and a silent
    /// rollback would hide the inconsistency from the operator.
    pub fn check_in(
        &self,
        owner_name: &str,
        plate: &str,
        phone: &str,
        address: &str,
        spot_id: u32,
        now: i64,
    ) -> AppResult<Session> {
        let owner_name = validate_text_field("owner name", owner_name)?;
        let address = validate_text_field("address", address)?;
        let plate = validate_plate(plate)?;
        validate_phone(phone)?;

        let mut spots = self.spots.load()?;

        if SpotTable::find_by_plate(&spots, plate).is_some() {
            return Err(AppError::DuplicatePlate(plate.to_string()));
        }

        let target = spots
            .iter_mut()
            .find(|s| s.id == spot_id && !s.occupied)
            .ok_or(AppError::InvalidSpot(spot_id))?;
        target.occupy(plate, now);

        self.spots.save(&spots)?;

        let session = Session::open(owner_name, plate, phone, address, spot_id, now);
        self.ledger.append(&session)?;

        Ok(session)
    }

    /// Check a vehicle out by plate. `now` is the exit timestamp.
    ///
    /// The checkout proceeds even when no open ledger record matches the
    /// plate; `Receipt::ledger_amended` reports it and callers must warn.
    pub fn check_out(&self, plate: &str, now: i64) -> AppResult<Receipt> {
        let plate = plate.trim();
        if plate.is_empty() {
            return Err(AppError::InvalidField("plate", "must not be empty".into()));
        }

        let mut spots = self.spots.load()?;

        // Fast-path rejection before any plate lookup.
        if SpotTable::count_occupied(&spots) == 0 {
            return Err(AppError::NothingParked);
        }

        let target = spots
            .iter_mut()
            .find(|s| s.holds_plate(plate))
            .ok_or_else(|| AppError::PlateNotFound(plate.to_string()))?;

        let spot_id = target.id;
        let entry_time = target.entry_time;
        let fee = compute_fee(entry_time, now, self.rate_per_second);
        target.release();

        self.spots.save(&spots)?;

        let ledger_amended = self.ledger.close_open_session(plate, now, fee)?;

        Ok(Receipt {
            plate: plate.to_string(),
            spot_id,
            entry_time,
            exit_time: now,
            duration_secs: (now - entry_time).max(0),
            fee,
            ledger_amended,
        })
    }

    /// Current spot states in ascending id order. Pure read.
    pub fn status(&self) -> AppResult<Vec<Spot>> {
        self.spots.load()
    }

    pub fn search_by_owner(&self, name: &str) -> AppResult<OwnerHistory> {
        self.ledger.query_by_owner(name.trim())
    }

    pub fn search_by_plate(&self, plate: &str) -> AppResult<PlateHistory> {
        self.ledger.query_by_plate(plate.trim())
    }
}

/// Trimmed, non-empty, and safe for the comma-separated ledger line.
fn validate_text_field<'a>(field: &'static str, value: &'a str) -> AppResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::InvalidField(field, "must not be empty".into()));
    }
    if value.contains(',') || value.contains('\n') {
        return Err(AppError::InvalidField(
            field,
            "must not contain commas or newlines".into(),
        ));
    }
    Ok(value)
}

/// Plates additionally appear in the space-separated spot table, so they
/// must not contain whitespace either.
fn validate_plate(plate: &str) -> AppResult<&str> {
    let plate = validate_text_field("plate", plate)?;
    if plate.chars().any(|c| c.is_whitespace()) {
        return Err(AppError::InvalidField(
            "plate",
            "must not contain whitespace".into(),
        ));
    }
    Ok(plate)
}

fn validate_phone(phone: &str) -> AppResult<()> {
    let phone = phone.trim();
    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_validation() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("123456789").is_err());
        assert!(validate_phone("12345678901").is_err());
        assert!(validate_phone("12345678ab").is_err());
    }

    #[test]
    fn plate_validation() {
        assert!(validate_plate("ABC123").is_ok());
        assert!(validate_plate("").is_err());
        assert!(validate_plate("AB C").is_err());
        assert!(validate_plate("AB,C").is_err());
    }

    #[test]
    fn text_field_validation() {
        assert_eq!(validate_text_field("owner name", " Alice ").unwrap(), "Alice");
        assert!(validate_text_field("address", "  ").is_err());
        assert!(validate_text_field("address", "a,b").is_err());
    }
}
