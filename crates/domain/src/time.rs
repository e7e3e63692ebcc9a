//! Wall-clock helpers.

use chrono::{DateTime, Local};

/// Local timestamp used to stamp the dashboard footer.
pub type Timestamp = DateTime<Local>;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now()
}

/// Format a timestamp as `HH:MM:SS` for the footer note.
#[must_use]
pub fn clock_label(ts: &Timestamp) -> String {
    ts.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_local_time() {
        let before = Local::now();
        let ts = now();
        let after = Local::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_clock_label_with_zero_padding() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(clock_label(&ts), "07:05:03");
    }
}
