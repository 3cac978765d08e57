//! Timestamp Rendering
//!
//! The backend stamps pastes with nanoseconds since the Unix epoch.

use chrono::DateTime;

/// Render a backend timestamp as UTC wall-clock time.
pub fn format_timestamp(nanos: u64) -> String {
    let secs = (nanos / 1_000_000_000) as i64;
    let sub_nanos = (nanos % 1_000_000_000) as u32;
    DateTime::from_timestamp(secs, sub_nanos)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| nanos.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_backend_nanos_as_utc() {
        assert_eq!(
            format_timestamp(1_705_321_845_000_000_000),
            "2024-01-15 12:30:45 UTC"
        );
    }

    #[test]
    fn zero_is_the_epoch() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
    }
}
