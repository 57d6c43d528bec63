use serde::Serialize;

/// Aggregated parking history for one owner name.
///
/// `plates` is in first-seen (append) order and unbounded; display layers
/// may cap how many they show.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OwnerHistory {
    pub total_entries: usize,
    pub plates: Vec<String>,
}

/// Aggregated parking history for one license plate.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlateHistory {
    pub total_entries: usize,
    pub owners: Vec<String>,
}
