//! Posted-date recency filter.

use chrono::NaiveDate;
use tracing::warn;

/// Date format used by the search API, e.g. "March 1, 2024".
const POSTED_DATE_FORMAT: &str = "%B %d, %Y";

/// Default lookback window in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 1;

/// Check whether `date_str` falls within `window_days` of an explicit pivot
/// date. Callers pin the pivot once per run so every batch is judged
/// against the same "today".
///
/// A future-dated posting gives a negative day difference, which still
/// satisfies the window. A date that does not parse is treated as not
/// recent, so a malformed posting is excluded rather than notified.
pub fn is_recent_on(date_str: &str, window_days: i64, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(date_str, POSTED_DATE_FORMAT) {
        Ok(posted) => (today - posted).num_days() <= window_days,
        Err(error) => {
            warn!(date = %date_str, %error, "unparseable posted date, excluding posting");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_recent() {
        assert!(is_recent_on("March 1, 2024", 1, day(2024, 3, 1)));
    }

    #[test]
    fn test_one_day_old_is_recent() {
        assert!(is_recent_on("March 1, 2024", 1, day(2024, 3, 2)));
    }

    #[test]
    fn test_outside_window_is_not_recent() {
        assert!(!is_recent_on("March 1, 2024", 1, day(2024, 3, 5)));
    }

    #[test]
    fn test_future_date_is_recent() {
        // Negative day difference still satisfies <= window.
        assert!(is_recent_on("March 10, 2024", 1, day(2024, 3, 2)));
    }

    #[test]
    fn test_wider_window() {
        assert!(is_recent_on("March 1, 2024", 7, day(2024, 3, 7)));
        assert!(!is_recent_on("March 1, 2024", 7, day(2024, 3, 9)));
    }

    #[test]
    fn test_unparseable_date_is_not_recent() {
        assert!(!is_recent_on("TBD", 1, day(2024, 3, 1)));
        assert!(!is_recent_on("2024-03-01", 1, day(2024, 3, 1)));
        assert!(!is_recent_on("", 1, day(2024, 3, 1)));
    }

    #[test]
    fn test_zero_padded_day_parses() {
        assert!(is_recent_on("March 01, 2024", 1, day(2024, 3, 1)));
    }
}
