use serde::Serialize;

/// Result of a successful checkout.
///
/// `ledger_amended` is false when the spot was freed but no open ledger
/// record matched the plate; callers must surface that as a warning.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub plate: String,
    pub spot_id: u32,
    pub entry_time: i64,
    pub exit_time: i64,
    pub duration_secs: i64,
    pub fee: f64,
    pub ledger_amended: bool,
}
