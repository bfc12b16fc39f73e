// SPDX-License-Identifier: MIT

//! Shared helpers for date formatting.

use chrono::{DateTime, Datelike, Utc};

/// Fixed calendar table, indexed by 0-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a timestamp as "<Month name> <day-of-month>", e.g. "June 5".
pub fn month_day_label(date: DateTime<Utc>) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_day_label() {
        let date = Utc.with_ymd_and_hms(2024, 6, 5, 10, 30, 0).unwrap();
        assert_eq!(month_day_label(date), "June 5");

        let date = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(month_day_label(date), "January 31");

        let date = Utc.with_ymd_and_hms(2024, 12, 1, 23, 59, 59).unwrap();
        assert_eq!(month_day_label(date), "December 1");
    }
}
