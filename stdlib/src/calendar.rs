//! Day of the week for Gregorian dates

use std::fmt;

use crate::error::{ensure_arg, StdlibResult};

/// First year accepted by [`weekday`].
pub const FIRST_SUPPORTED_YEAR: i64 = 1754;

/// Last year accepted by [`weekday`], chrono's `NaiveDate::MAX` year.
pub const LAST_SUPPORTED_YEAR: i64 = 262_143;

/// Days of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Weekday for a Monday-first index in `0..=6`.
    pub fn from_index(index: usize) -> Option<Self> {
        WEEK.get(index).copied()
    }

    /// Monday-first index in `0..=6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used throughout the course material.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "segunda-feira",
            Weekday::Tuesday => "terça-feira",
            Weekday::Wednesday => "quarta-feira",
            Weekday::Thursday => "quinta-feira",
            Weekday::Friday => "sexta-feira",
            Weekday::Saturday => "sábado",
            Weekday::Sunday => "domingo",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1 to 12) of `year`.
pub fn days_in_month(month: i64, year: i64) -> StdlibResult<i64> {
    ensure_arg!((1..=12).contains(&month), "month out of [1, 12]: {}", month);

    Ok(match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    })
}

/// Day of the week of a Gregorian date.
///
/// January and February count as months 13 and 14 of the previous year, then
/// `d + 2m + 3(m+1)/5 + y + y/4 - y/100 + y/400` taken modulo 7 is the
/// Monday-first index.
///
/// # Errors
/// - `month` outside `[1, 12]`
/// - `year` outside `[1754, 262143]`
/// - `day` outside the days of that month
pub fn weekday_of(day: i64, month: i64, year: i64) -> StdlibResult<Weekday> {
    ensure_arg!((1..=12).contains(&month), "month out of [1, 12]: {}", month);
    ensure_arg!(
        (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&year),
        "year out of [{}, {}]: {}",
        FIRST_SUPPORTED_YEAR,
        LAST_SUPPORTED_YEAR,
        year
    );
    let last_day = days_in_month(month, year)?;
    ensure_arg!(
        (1..=last_day).contains(&day),
        "day out of [1, {}] for {:02}/{}: {}",
        last_day,
        month,
        year,
        day
    );

    let (m, y) = if month <= 2 {
        (month + 12, year - 1)
    } else {
        (month, year)
    };
    let k = day + 2 * m + 3 * (m + 1) / 5 + y + y / 4 - y / 100 + y / 400;

    Ok(WEEK[(k % 7) as usize])
}

/// Name of the day of the week of a Gregorian date, Monday-first naming as
/// in [`Weekday::name`].
///
/// # Test Cases
/// - weekday(1, 1, 2000) = "sábado"
pub fn weekday(day: i64, month: i64, year: i64) -> StdlibResult<&'static str> {
    weekday_of(day, month, year).map(Weekday::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dates() {
        assert_eq!(weekday(1, 1, 2000).unwrap(), "sábado");
        assert_eq!(weekday_of(1, 1, 2000).unwrap(), Weekday::Saturday);
        assert_eq!(weekday_of(29, 2, 2000).unwrap(), Weekday::Tuesday);
        assert_eq!(weekday_of(4, 7, 1776).unwrap(), Weekday::Thursday);
        assert_eq!(weekday_of(25, 12, 2023).unwrap(), Weekday::Monday);
        assert_eq!(weekday_of(1, 3, 2024).unwrap(), Weekday::Friday);
        assert_eq!(weekday_of(31, 12, 1999).unwrap(), Weekday::Friday);
    }

    #[test]
    fn test_consecutive_days_cycle() {
        let mut previous = weekday_of(1, 1, 2024).unwrap().index();
        for month in 1..=12 {
            for day in 1..=days_in_month(month, 2024).unwrap() {
                if month == 1 && day == 1 {
                    continue;
                }
                let current = weekday_of(day, month, 2024).unwrap().index();
                assert_eq!(current, (previous + 1) % 7, "{}/{}", day, month);
                previous = current;
            }
        }
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!(weekday(1, 13, 2000).is_err());
        assert!(weekday(1, 0, 2000).is_err());
        assert!(weekday(32, 1, 2000).is_err());
        assert!(weekday(0, 1, 2000).is_err());
        assert!(weekday(1, 1, 1753).is_err());
        assert!(weekday(30, 2, 2000).is_err());
        assert!(weekday(29, 2, 1900).is_err());
        assert!(weekday(31, 4, 2000).is_err());
    }

    #[test]
    fn test_rejects_years_past_last_supported() {
        assert!(weekday(31, 12, LAST_SUPPORTED_YEAR).is_ok());
        assert!(weekday(1, 1, LAST_SUPPORTED_YEAR + 1).is_err());
        assert!(weekday(1, 3, i64::MAX).is_err());
        assert!(weekday(1, 1, i64::MAX).is_err());
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::from_index(0), Some(Weekday::Monday));
        assert_eq!(Weekday::from_index(6), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_index(7), None);
        assert_eq!(Weekday::Saturday.english_name(), "Saturday");
        assert_eq!(Weekday::Wednesday.to_string(), "quarta-feira");
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_month(2, 2024).unwrap(), 29);
        assert!(days_in_month(13, 2024).is_err());
    }
}
