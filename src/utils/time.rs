//! Time utilities: epoch clock and human-readable rendering.

use chrono::{Local, TimeZone, Utc};

/// Current time as epoch seconds. All persisted timestamps use this form.
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

/// Render an epoch timestamp in local time for receipts and listings.
pub fn format_epoch(epoch: i64) -> String {
    match Local.timestamp_opt(epoch, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => format!("epoch {}", epoch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_epoch_is_stable_in_shape() {
        let s = format_epoch(1735000000);
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(s.len(), 19);
        assert_eq!(&s[4..5], "-");
        assert_eq!(&s[10..11], " ");
    }
}
