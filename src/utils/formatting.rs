//! Formatting utilities for CLI output.

/// Render a fee with currency prefix, e.g. `Rs 3.00`.
pub fn format_fee(fee: f64, currency: &str) -> String {
    format!("{} {:.2}", currency, fee)
}

/// Render a duration in seconds as `1h 02m 05s` (hours omitted when zero).
pub fn secs2readable(secs: i64) -> String {
    let s = secs.max(0);
    let hours = s / 3600;
    let minutes = (s % 3600) / 60;
    let seconds = s % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else {
        format!("{}m {:02}s", minutes, seconds)
    }
}
