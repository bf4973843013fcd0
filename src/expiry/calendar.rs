//! Calendar arithmetic used by the expiry calculation

use chrono::{Datelike, Months, NaiveDate};

/// Check if a year is a leap year in the proleptic Gregorian calendar
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given year-month (0 for months outside 1..=12)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in the month containing `date`
pub fn month_length(date: NaiveDate) -> u32 {
    days_in_month(date.year(), date.month())
}

/// Add calendar months, clamping to the last day of the target month
/// when the day-of-month does not exist there (Jan 31 + 1 month = Feb 28/29).
/// Returns None if the result leaves chrono's date range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Replace the day-of-month, clamped to the month's length.
/// Year and month are never altered.
pub fn with_day_clamped(date: NaiveDate, day: u32) -> NaiveDate {
    let day = day.clamp(1, month_length(date));
    date.with_day(day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_months(date(2023, 1, 31), 1), Some(date(2023, 2, 28)));
        assert_eq!(add_months(date(2024, 3, 31), 1), Some(date(2024, 4, 30)));
        assert_eq!(add_months(date(2024, 11, 15), 3), Some(date(2025, 2, 15)));
        assert_eq!(add_months(date(2024, 5, 10), 0), Some(date(2024, 5, 10)));
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_with_day_clamped() {
        assert_eq!(with_day_clamped(date(2024, 2, 10), 31), date(2024, 2, 29));
        assert_eq!(with_day_clamped(date(2024, 3, 29), 31), date(2024, 3, 31));
        assert_eq!(with_day_clamped(date(2024, 4, 1), 15), date(2024, 4, 15));
        assert_eq!(with_day_clamped(date(2024, 4, 20), 0), date(2024, 4, 1));
    }
}
