//! Flat-file adapter for the spot table.
//!
//! One line per spot, space separated: `spotId plate occupiedFlag entryTime`.
//! Exactly `capacity` lines with ids 1..N ascending.

use crate::errors::{AppError, AppResult};
use crate::models::spot::Spot;
use std::fs;
use std::path::PathBuf;

pub struct SpotTable {
    path: PathBuf,
    capacity: u32,
}

impl SpotTable {
    pub fn new(path: impl Into<PathBuf>, capacity: u32) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Load the persisted table. If no file exists yet, initialize all
    /// spots to Empty and persist them before returning.
    pub fn load(&self) -> AppResult<Vec<Spot>> {
        if !self.path.exists() {
            let spots: Vec<Spot> = (1..=self.capacity).map(Spot::empty).collect();
            self.save(&spots)?;
            return Ok(spots);
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut spots = Vec::with_capacity(self.capacity as usize);
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            spots.push(Spot::parse_line(line)?);
        }

        // A table whose shape disagrees with the configured capacity is
        // corrupt (or belongs to another configuration); refuse to guess.
        if spots.len() != self.capacity as usize {
            return Err(AppError::Storage(format!(
                "spot table '{}' has {} records, expected {}",
                self.path.display(),
                spots.len(),
                self.capacity
            )));
        }
        for (i, spot) in spots.iter().enumerate() {
            let expected = i as u32 + 1;
            if spot.id != expected {
                return Err(AppError::Storage(format!(
                    "spot table '{}' out of order: found id {} at position {}",
                    self.path.display(),
                    spot.id,
                    expected
                )));
            }
        }

        Ok(spots)
    }

    /// Overwrite the persisted table with the given spots (atomic replace).
    pub fn save(&self, spots: &[Spot]) -> AppResult<()> {
        let mut out = String::new();
        for spot in spots {
            out.push_str(&spot.to_line());
            out.push('\n');
        }
        super::atomic_write(&self.path, &out)
    }

    /// First occupied spot whose plate matches, case-insensitively.
    pub fn find_by_plate<'a>(spots: &'a [Spot], plate: &str) -> Option<&'a Spot> {
        spots.iter().find(|s| s.holds_plate(plate))
    }

    pub fn find_by_id(spots: &[Spot], id: u32) -> Option<&Spot> {
        spots.iter().find(|s| s.id == id)
    }

    pub fn count_occupied(spots: &[Spot]) -> usize {
        spots.iter().filter(|s| s.occupied).count()
    }
}
