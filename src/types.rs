use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, ETHIOPIAN_LEAP_REMAINDER, ETHIOPIAN_MONTH_DAYS,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_MONTHS,
    JD_EPOCH_OFFSET_AMETE_ALEM, JD_EPOCH_OFFSET_AMETE_MIHRET, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_YEAR,
    PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};
use crate::names::AMHARIC_WEEKDAYS;
use crate::prelude::*;
use crate::{CalendarError, DateError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A Julian Day Number: days counted from a fixed epoch, shared by every calendar.
///
/// Any `i64` is a valid day number. Turning one back into a calendar date fails
/// with [`CalendarError::YearOutOfRange`] once the year leaves
/// `MIN_YEAR..=MAX_YEAR`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Jdn(i64);

impl Jdn {
    /// Wraps a raw day number
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day number
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of the week this day number falls on
    pub const fn weekday(self) -> Weekday {
        match (self.0 + 1).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// Ethiopian era anchor.
///
/// Ethiopian years `<= 0` count from the Amete Alem epoch, positive years from
/// the Amete Mihret epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Era {
    /// Year of Mercy (ዓ/ም)
    #[display(fmt = "ዓ/ም")]
    AmeteMihret,
    /// Year of the World (ዓ/ዓ)
    #[display(fmt = "ዓ/ዓ")]
    AmeteAlem,
}

impl Era {
    /// JDN offset of the era epoch
    pub const fn offset(self) -> i64 {
        match self {
            Self::AmeteMihret => JD_EPOCH_OFFSET_AMETE_MIHRET,
            Self::AmeteAlem => JD_EPOCH_OFFSET_AMETE_ALEM,
        }
    }

    /// Era an Ethiopian year number is counted in
    pub const fn for_ethiopian_year(year: i32) -> Self {
        if year <= 0 {
            Self::AmeteAlem
        } else {
            Self::AmeteMihret
        }
    }

    /// Era that applies to a day: Amete Mihret from Meskerem 1 of its year 1 onwards
    pub const fn for_jdn(jdn: Jdn) -> Self {
        if jdn.get() >= Self::AmeteMihret.first_day().get() {
            Self::AmeteMihret
        } else {
            Self::AmeteAlem
        }
    }

    /// First day (Meskerem 1) of year 1 of the era
    pub const fn first_day(self) -> Jdn {
        Jdn::new(self.offset() + 365)
    }
}

/// Day of the week, Sunday first as in the Amharic name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Amharic name of the weekday
    pub const fn amharic_name(self) -> &'static str {
        AMHARIC_WEEKDAYS[self as usize]
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Ethiopian leap years precede the Gregorian ones: the last year of each four-year cycle.
pub const fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == ETHIOPIAN_LEAP_REMAINDER
}

/// Days in a Gregorian month, or 0 when `month` is not in `1..=12`.
pub fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    if month == 0 || month > GREGORIAN_MONTHS {
        return 0;
    }
    gregorian_month_table(year)[usize::from(month)]
}

/// Days in an Ethiopian month, or 0 when `month` is not in `1..=13`.
pub const fn days_in_ethiopian_month(year: i32, month: u8) -> u8 {
    match month {
        1..=12 => ETHIOPIAN_MONTH_DAYS,
        PAGUME if is_ethiopian_leap_year(year) => PAGUME_DAYS_LEAP,
        PAGUME => PAGUME_DAYS,
        _ => 0,
    }
}

/// Month lengths for one Gregorian year, built fresh for every call.
pub(crate) fn gregorian_month_table(year: i32) -> [u8; 13] {
    let mut table = DAYS_IN_MONTH;
    if is_gregorian_leap_year(year) {
        table[usize::from(FEBRUARY)] = FEBRUARY_DAYS_LEAP;
    }
    table
}

pub(crate) fn check_year(year: i32) -> Result<i32, DateError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(DateError::InvalidYear(year));
    }
    Ok(year)
}

pub(crate) fn check_month(month: u8, max: u8) -> Result<u8, DateError> {
    if month == 0 || month > max {
        return Err(DateError::InvalidMonth { month, max });
    }
    Ok(month)
}

/// Narrows a year computed from a day number to the supported range.
pub(crate) fn year_from_days(year: i64) -> Result<i32, CalendarError> {
    i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(CalendarError::YearOutOfRange(year))
}

/// Narrows a computed month or day to a date field; anything that does not fit
/// is mapped to a value the date constructors reject.
pub(crate) fn field(value: i64) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

/// Splits `[-]year-month-day` into its numeric components.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    // A leading separator is the sign of the year
    let (negative, body) = trimmed
        .strip_prefix(DATE_SEPARATOR)
        .map_or((false, trimmed), |rest| (true, rest));

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat(format!(
            "Expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, found {} components in {trimmed}",
            parts.len()
        )));
    }

    let year: i32 = parse_component(parts[0])?;
    let month: u8 = parse_component(parts[1])?;
    let day: u8 = parse_component(parts[2])?;

    Ok((if negative { -year } else { year }, month, day))
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gregorian_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative year divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century not divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_gregorian_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_is_ethiopian_leap_year() {
        assert!(is_ethiopian_leap_year(3));
        assert!(is_ethiopian_leap_year(2015));
        assert!(!is_ethiopian_leap_year(2016));
        assert!(!is_ethiopian_leap_year(2004));
        assert!(is_ethiopian_leap_year(-1));
        assert!(!is_ethiopian_leap_year(0));
    }

    #[test]
    fn test_days_in_gregorian_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_gregorian_month(2024, month), 31, "Month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_gregorian_month(2024, month), 30, "Month {month}");
        }
        assert_eq!(days_in_gregorian_month(2000, 2), 29);
        assert_eq!(days_in_gregorian_month(1900, 2), 28);
        assert_eq!(days_in_gregorian_month(2024, 2), 29);
        assert_eq!(days_in_gregorian_month(2100, 2), 28);
        assert_eq!(days_in_gregorian_month(2024, 0), 0);
        assert_eq!(days_in_gregorian_month(2024, 13), 0);
    }

    #[test]
    fn test_month_table_is_local_per_year() {
        let leap = gregorian_month_table(2024);
        let common = gregorian_month_table(2023);
        assert_eq!(leap[2], 29);
        assert_eq!(common[2], 28);
        // Building a leap table leaves the shared constant untouched
        assert_eq!(DAYS_IN_MONTH[2], 28);
        assert_eq!(leap.iter().map(|&d| u32::from(d)).sum::<u32>(), 366);
        assert_eq!(common.iter().map(|&d| u32::from(d)).sum::<u32>(), 365);
    }

    #[test]
    fn test_days_in_ethiopian_month() {
        for month in 1..=12 {
            assert_eq!(days_in_ethiopian_month(2016, month), 30);
        }
        assert_eq!(days_in_ethiopian_month(2016, 13), 5);
        assert_eq!(days_in_ethiopian_month(2015, 13), 6);
        assert_eq!(days_in_ethiopian_month(2016, 0), 0);
        assert_eq!(days_in_ethiopian_month(2016, 14), 0);
    }

    #[test]
    fn test_weekday() {
        // 2000-01-01 was a Saturday, 1970-01-01 a Thursday
        assert_eq!(Jdn::new(2_451_545).weekday(), Weekday::Saturday);
        assert_eq!(Jdn::new(2_440_588).weekday(), Weekday::Thursday);
        assert_eq!(Jdn::new(2_451_546).weekday(), Weekday::Sunday);
        // Negative day numbers keep cycling
        assert_eq!(Jdn::new(-1).weekday(), Weekday::Sunday);
        assert_eq!(Jdn::new(-2).weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Weekday::Sunday.amharic_name(), "እሁድ");
        assert_eq!(Weekday::Saturday.amharic_name(), "ቅዳሜ");
        assert_eq!(Weekday::Monday.to_string(), "Monday");
    }

    #[test]
    fn test_era_selection() {
        assert_eq!(Era::for_ethiopian_year(0), Era::AmeteAlem);
        assert_eq!(Era::for_ethiopian_year(-5), Era::AmeteAlem);
        assert_eq!(Era::for_ethiopian_year(1), Era::AmeteMihret);

        let threshold = Era::AmeteMihret.first_day();
        assert_eq!(threshold, Jdn::new(1_724_221));
        assert_eq!(Era::for_jdn(threshold), Era::AmeteMihret);
        assert_eq!(Era::for_jdn(Jdn::new(threshold.get() - 1)), Era::AmeteAlem);
    }

    #[test]
    fn test_era_display() {
        assert_eq!(Era::AmeteMihret.to_string(), "ዓ/ም");
        assert_eq!(Era::AmeteAlem.to_string(), "ዓ/ዓ");
    }

    #[test]
    fn test_jdn_conversions_and_serde() {
        let jdn: Jdn = 2_455_957.into();
        let raw: i64 = jdn.into();
        assert_eq!(raw, 2_455_957);
        assert_eq!(jdn.to_string(), "2455957");

        let json = serde_json::to_string(&jdn).unwrap();
        assert_eq!(json, "2455957");
        let parsed: Jdn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, jdn);
    }

    #[test]
    fn test_year_from_days() {
        assert_eq!(year_from_days(2024).unwrap(), 2024);
        assert!(matches!(
            year_from_days(i64::from(MAX_YEAR) + 1),
            Err(CalendarError::YearOutOfRange(_))
        ));
        assert!(matches!(
            year_from_days(i64::MIN),
            Err(CalendarError::YearOutOfRange(i64::MIN))
        ));
    }

    #[test]
    fn test_parse_ymd() {
        assert_eq!(parse_ymd("2004-5-21").unwrap(), (2004, 5, 21));
        assert_eq!(parse_ymd(" 2012-01-30 ").unwrap(), (2012, 1, 30));
        assert_eq!(parse_ymd("-5493-07-18").unwrap(), (-5493, 7, 18));
        assert_eq!(parse_ymd("0-1-1").unwrap(), (0, 1, 1));
        assert!(matches!(parse_ymd(""), Err(DateError::EmptyInput)));
        assert!(matches!(parse_ymd("   "), Err(DateError::EmptyInput)));
        assert!(matches!(parse_ymd("2004-5"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_ymd("2004-5-21-1"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_ymd("2004-+5-21"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_ymd("20X4-5-21"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_ymd("2004-5-300"), Err(DateError::InvalidFormat(_))));
        assert!(matches!(parse_ymd("--2004-5-21"), Err(DateError::InvalidFormat(_))));
    }
}
