//! Display-time formatting for chat messages.

use std::fmt;

use chrono::{DateTime, Local, TimeZone};

/// Formats `time` as a zero-padded 24-hour `HH:MM`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use nfl_genai_core::time::format_time;
///
/// let kickoff = Utc.with_ymd_and_hms(2025, 9, 5, 0, 20, 0).unwrap();
/// assert_eq!(format_time(&kickoff), "00:20");
/// ```
pub fn format_time<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format("%H:%M").to_string()
}

/// Current local time as `HH:MM`.
pub fn format_now() -> String {
    format_time(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_afternoon_uses_24_hour_clock() {
        let time = Utc.with_ymd_and_hms(2024, 11, 28, 16, 30, 45).unwrap();
        assert_eq!(format_time(&time), "16:30");
    }

    #[test]
    fn test_respects_offset() {
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let time = eastern.with_ymd_and_hms(2024, 2, 11, 18, 5, 0).unwrap();
        assert_eq!(format_time(&time), "18:05");
        assert_eq!(format_time(&time.with_timezone(&Utc)), "23:05");
    }

    #[test]
    fn test_format_now_shape() {
        let now = format_now();
        assert_eq!(now.len(), 5);
        assert_eq!(&now[2..3], ":");
    }
}
