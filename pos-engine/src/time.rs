//! Business-timezone time helpers
//!
//! All engine timestamps are `i64` Unix millis UTC; these helpers convert
//! to and from the business timezone at presentation and windowing edges.

use chrono::{DateTime, Duration, NaiveDate, Timelike};
use chrono_tz::Tz;

/// Millis timestamp → business-timezone datetime
///
/// Out-of-range timestamps collapse to the epoch rather than panic.
pub fn to_business_time(millis: i64, tz: Tz) -> DateTime<Tz> {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .with_timezone(&tz)
}

/// Start of the given date (00:00:00) → Unix millis
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(0, 0, 0).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of the day containing `now_millis`, in the business timezone
pub fn current_day_start_millis(now_millis: i64, tz: Tz) -> i64 {
    day_start_millis(to_business_time(now_millis, tz).date_naive(), tz)
}

/// Start of the day `days_back` days before the day containing `now_millis`
pub fn day_start_millis_back(now_millis: i64, days_back: i64, tz: Tz) -> i64 {
    let date = to_business_time(now_millis, tz).date_naive() - Duration::days(days_back);
    day_start_millis(date, tz)
}

/// Hour of day (0..=23) of a millis timestamp in the business timezone
pub fn hour_of_day(millis: i64, tz: Tz) -> u32 {
    to_business_time(millis, tz).hour()
}

/// Business date (for order numbers), formatted `YYYYMMDD`
pub fn business_date_compact(millis: i64, tz: Tz) -> String {
    to_business_time(millis, tz).format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Moscow;

    // 2026-08-07 12:30:00 MSK (UTC+3)
    const NOON_ISH: i64 = 1_786_095_000_000;

    #[test]
    fn day_start_is_midnight_local() {
        let start = current_day_start_millis(NOON_ISH, Moscow);
        let dt = to_business_time(start, Moscow);
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
        assert!(start <= NOON_ISH);
        assert!(NOON_ISH - start < 24 * 3_600_000);
    }

    #[test]
    fn hour_of_day_uses_business_timezone() {
        let start = current_day_start_millis(NOON_ISH, Moscow);
        assert_eq!(hour_of_day(start, Moscow), 0);
        assert_eq!(hour_of_day(start + 13 * 3_600_000, Moscow), 13);
    }

    #[test]
    fn days_back_walks_whole_days() {
        let today = current_day_start_millis(NOON_ISH, Moscow);
        let week_ago = day_start_millis_back(NOON_ISH, 6, Moscow);
        assert_eq!(today - week_ago, 6 * 24 * 3_600_000);
    }
}
