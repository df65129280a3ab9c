use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use eyre::{eyre, Result};

/// Date format accepted on input, `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
///
/// ```
/// use tronex_common::utils::time::parse_date;
///
/// assert!(parse_date("2024-02-29").is_ok());
/// assert!(parse_date("2023-02-29").is_err());
/// ```
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|e| eyre!("invalid date '{}', expected YYYY-MM-DD: {}", date, e))
}

/// Milliseconds since the epoch at UTC midnight of the given day.
pub fn day_start_millis(day: NaiveDate) -> i64 {
    day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis()).unwrap_or_default()
}

/// Converts two inclusive calendar dates into a half-open millisecond window: the start of
/// `date_from` and the start of the day after `date_to`, both in UTC.
///
/// ```
/// use tronex_common::utils::time::date_range_to_window;
///
/// let (start, end) = date_range_to_window("2024-01-01", "2024-01-02").unwrap();
/// assert_eq!(start, 1704067200000);
/// assert_eq!(end, 1704240000000);
/// ```
pub fn date_range_to_window(date_from: &str, date_to: &str) -> Result<(i64, i64)> {
    let from = parse_date(date_from)?;
    let to = parse_date(date_to)?;
    let end = to.checked_add_signed(Duration::days(1)).ok_or_else(|| eyre!("date out of range"))?;

    Ok((day_start_millis(from), day_start_millis(end)))
}

/// The UTC calendar day a millisecond timestamp falls on.
pub fn millis_to_day(timestamp_ms: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|dt| dt.date_naive())
}

/// Human-readable UTC date for a millisecond timestamp, `YYYY-MM-DD HH:MM:SS`.
///
/// ```
/// use tronex_common::utils::time::format_millis;
///
/// assert_eq!(format_millis(1704067200000), "2024-01-01 00:00:00");
/// ```
pub fn format_millis(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Format a day the way CoinGecko's history endpoint expects, `DD-MM-YYYY`.
pub fn coingecko_date(day: NaiveDate) -> String {
    day.format("%d-%m-%Y").to_string()
}

/// Get the current timestamp in a pretty format
///
/// ```
/// use tronex_common::utils::time::pretty_timestamp;
///
/// let timestamp = pretty_timestamp();
/// ```
pub fn pretty_timestamp() -> String {
    let now = Local::now();
    let mut ts = now.format("%d-%m-%Y %H:%M:%S.%f").to_string();
    ts.truncate(ts.len() - 3);
    ts.push('Z');
    ts
}

#[cfg(test)]
mod tests {
    use crate::utils::time::*;

    #[test]
    fn test_window_is_end_exclusive() {
        let (start, end) = date_range_to_window("2024-01-01", "2024-01-01").expect("window");
        assert_eq!(end - start, 86_400_000);
    }

    #[test]
    fn test_window_crosses_month_and_leap_day() {
        let (_, end) = date_range_to_window("2024-02-01", "2024-02-29").expect("window");
        assert_eq!(format_millis(end), "2024-03-01 00:00:00");
    }

    #[test]
    fn test_window_rejects_bad_dates() {
        assert!(date_range_to_window("2024-13-01", "2024-01-02").is_err());
        assert!(date_range_to_window("2024-01-01", "01/02/2024").is_err());
    }

    #[test]
    fn test_millis_to_day_truncates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
        assert_eq!(millis_to_day(1704067200000), Some(day));
        assert_eq!(millis_to_day(1704153599999), Some(day));
        assert_ne!(millis_to_day(1704153600000), Some(day));
    }

    #[test]
    fn test_coingecko_date() {
        let day = NaiveDate::from_ymd_opt(2025, 7, 6).expect("date");
        assert_eq!(coingecko_date(day), "06-07-2025");
    }
}
