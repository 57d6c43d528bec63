//! Fee calculation.

/// Fee for a parking session: duration in seconds times the per-second rate.
///
/// Negative durations (clock skew, manual system-time changes) clamp to a
/// zero fee; a checkout never credits the customer.
pub fn compute_fee(entry_time: i64, exit_time: i64, rate_per_second: f64) -> f64 {
    let duration = (exit_time - entry_time).max(0);
    duration as f64 * rate_per_second
}
