//! Calendar arithmetic used by prorating and replacement-income annualization

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekday on which replacement benefits are not paid
pub const UNPAID_WEEKDAY: Weekday = Weekday::Sun;

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        // Only reachable at the edge of chrono's supported range
        _ => 31,
    }
}

/// Days in the inclusive range `[start, end]` that do not fall on `excluded`
pub fn days_payable_between(start: NaiveDate, end: NaiveDate, excluded: Weekday) -> u32 {
    if end < start {
        return 0;
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| d.weekday() != excluded)
        .count() as u32
}

/// Payable days in a calendar year (1 January to 31 December, Sundays excluded)
pub fn days_payable_in_year(year: i32) -> u32 {
    match (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) {
        (Some(start), Some(end)) => days_payable_between(start, end, UNPAID_WEEKDAY),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 15)), 29);
        assert_eq!(days_in_month(date(2025, 4, 30)), 30);
        assert_eq!(days_in_month(date(2025, 12, 1)), 31);
    }

    #[test]
    fn test_days_payable_in_year() {
        // 2025 starts on a Wednesday: 52 Sundays
        assert_eq!(days_payable_in_year(2025), 313);
        // 2023 starts and ends on a Sunday: 53 of them
        assert_eq!(days_payable_in_year(2023), 312);
        // Leap year starting on a Monday
        assert_eq!(days_payable_in_year(2024), 314);
    }

    #[test]
    fn test_days_payable_between_is_inclusive() {
        // Mon 3 Feb 2025 .. Sun 9 Feb 2025
        assert_eq!(days_payable_between(date(2025, 2, 3), date(2025, 2, 9), Weekday::Sun), 6);
        assert_eq!(days_payable_between(date(2025, 2, 9), date(2025, 2, 9), Weekday::Sun), 0);
        assert_eq!(days_payable_between(date(2025, 2, 10), date(2025, 2, 9), Weekday::Sun), 0);
    }
}
