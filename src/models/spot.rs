use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Plate sentinel stored for a free spot. Part of the on-disk format.
pub const EMPTY_PLATE: &str = "EMPTY";

/// One physical parking space.
///
/// Persisted as one space-separated line:
/// `spotId plate occupiedFlag entryTimeEpoch`
/// where `plate` is the literal `EMPTY` and both trailing fields are `0`
/// while the spot is free.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spot {
    pub id: u32,
    pub plate: String,
    pub occupied: bool,
    pub entry_time: i64,
}

impl Spot {
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            plate: EMPTY_PLATE.to_string(),
            occupied: false,
            entry_time: 0,
        }
    }

    /// Transition Empty → Occupied.
    pub fn occupy(&mut self, plate: &str, entry_time: i64) {
        self.plate = plate.to_string();
        self.occupied = true;
        self.entry_time = entry_time;
    }

    /// Transition Occupied → Empty, resetting plate and entry time.
    pub fn release(&mut self) {
        self.plate = EMPTY_PLATE.to_string();
        self.occupied = false;
        self.entry_time = 0;
    }

    pub fn holds_plate(&self, plate: &str) -> bool {
        self.occupied && self.plate.eq_ignore_ascii_case(plate)
    }

    /// Encode to the on-disk line format (no trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            self.plate,
            if self.occupied { 1 } else { 0 },
            self.entry_time
        )
    }

    /// Decode one line of the spot table.
    pub fn parse_line(line: &str) -> AppResult<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(AppError::Storage(format!(
                "malformed spot record (expected 4 fields, got {}): '{}'",
                fields.len(),
                line
            )));
        }

        let id: u32 = fields[0]
            .parse()
            .map_err(|_| AppError::Storage(format!("bad spot id '{}'", fields[0])))?;
        let occupied = match fields[2] {
            "0" => false,
            "1" => true,
            other => {
                return Err(AppError::Storage(format!(
                    "bad occupied flag '{}' for spot {}",
                    other, id
                )));
            }
        };
        let entry_time: i64 = fields[3]
            .parse()
            .map_err(|_| AppError::Storage(format!("bad entry time '{}' for spot {}", fields[3], id)))?;

        Ok(Self {
            id,
            plate: fields[1].to_string(),
            occupied,
            entry_time,
        })
    }
}
