use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// One parking visit, from check-in to check-out.
///
/// Persisted as one comma-separated ledger line:
/// `ownerName,plate,phone,address,spotId,entryTimeEpoch,exitTimeEpoch,fee`
/// with the fee printed to 2 decimals. `exit_time == 0` marks a still-open
/// session. Text fields must not contain commas; the encoder relies on the
/// service layer rejecting them up front.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub owner_name: String,
    pub plate: String,
    pub phone: String,
    pub address: String,
    pub spot_id: u32,
    pub entry_time: i64,
    pub exit_time: i64,
    pub fee: f64,
}

impl Session {
    /// Constructor for a freshly checked-in (open) session.
    pub fn open(
        owner_name: &str,
        plate: &str,
        phone: &str,
        address: &str,
        spot_id: u32,
        entry_time: i64,
    ) -> Self {
        Self {
            owner_name: owner_name.to_string(),
            plate: plate.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            spot_id,
            entry_time,
            exit_time: 0,
            fee: 0.0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.exit_time == 0
    }

    /// Amend an open session on checkout. Closed sessions are never edited.
    pub fn close(&mut self, exit_time: i64, fee: f64) {
        self.exit_time = exit_time;
        self.fee = fee;
    }

    /// Encode to the on-disk ledger line (no trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{:.2}",
            self.owner_name,
            self.plate,
            self.phone,
            self.address,
            self.spot_id,
            self.entry_time,
            self.exit_time,
            self.fee
        )
    }

    /// Decode one ledger line.
    pub fn parse_line(line: &str) -> AppResult<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 8 {
            return Err(AppError::Storage(format!(
                "malformed ledger record (expected 8 fields, got {}): '{}'",
                fields.len(),
                line
            )));
        }

        let spot_id: u32 = fields[4]
            .parse()
            .map_err(|_| AppError::Storage(format!("bad spot id '{}' in ledger", fields[4])))?;
        let entry_time: i64 = fields[5]
            .parse()
            .map_err(|_| AppError::Storage(format!("bad entry time '{}' in ledger", fields[5])))?;
        let exit_time: i64 = fields[6]
            .parse()
            .map_err(|_| AppError::Storage(format!("bad exit time '{}' in ledger", fields[6])))?;
        let fee: f64 = fields[7]
            .parse()
            .map_err(|_| AppError::Storage(format!("bad fee '{}' in ledger", fields[7])))?;

        Ok(Self {
            owner_name: fields[0].to_string(),
            plate: fields[1].to_string(),
            phone: fields[2].to_string(),
            address: fields[3].to_string(),
            spot_id,
            entry_time,
            exit_time,
            fee,
        })
    }
}
