use crate::consts::{
    DAYS_IN_4_YEARS, DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, DAYS_IN_YEAR, DECEMBER,
    GREGORIAN_CYCLE, GREGORIAN_MONTHS, JD_EPOCH_OFFSET_GREGORIAN, MIN_DAY,
};
use crate::prelude::*;
use crate::types::{
    check_month, check_year, days_in_gregorian_month, field, gregorian_month_table,
    is_gregorian_leap_year, parse_ymd, year_from_days, Jdn, Weekday,
};
use crate::{CalendarError, DateError, EthiopianDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: 1 BC is year `0`, 2 BC is `-1`.
/// Fields are validated on construction, so February 29 only exists in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating every field
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for fields outside the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        check_year(year)?;
        check_month(month, GREGORIAN_MONTHS)?;
        if day < MIN_DAY || day > days_in_gregorian_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    /// Julian Day Number of this date
    pub const fn to_jdn(&self) -> Jdn {
        jdn_from_gregorian(self.year, self.month, self.day)
    }

    /// Gregorian date falling on `jdn`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year would leave
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn from_jdn(jdn: Jdn) -> Result<Self, CalendarError> {
        gregorian_from_jdn(jdn)
    }

    /// Converts to the Ethiopian calendar
    ///
    /// # Errors
    /// See [`EthiopianDate::from_jdn`].
    pub fn to_ethiopian(&self) -> Result<EthiopianDate, CalendarError> {
        let jdn = self.to_jdn();
        let converted = EthiopianDate::from_jdn(jdn)?;
        log::trace!("gregorian {self} -> jdn {jdn} -> ethiopian {converted}");
        Ok(converted)
    }

    pub const fn weekday(&self) -> Weekday {
        self.to_jdn().weekday()
    }
}

impl From<GregorianDate> for Jdn {
    fn from(date: GregorianDate) -> Self {
        date.to_jdn()
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// JDN of a proleptic Gregorian date. Divisions floor, so years `<= 0` work too.
pub(crate) const fn jdn_from_gregorian(year: i32, month: u8, day: u8) -> Jdn {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let prev = y - 1;

    // 1 when `year` itself is a leap year
    let s = y.div_euclid(4) - prev.div_euclid(4) - y.div_euclid(100) + prev.div_euclid(100)
        + y.div_euclid(400)
        - prev.div_euclid(400);
    // 1 for January and February
    let t = (14 - m).div_euclid(12);
    let n = 31 * t * (m - 1)
        + (1 - t) * (59 + s + 30 * (m - 3) + (3 * m - 7).div_euclid(5))
        + d
        - 1;

    Jdn::new(
        JD_EPOCH_OFFSET_GREGORIAN + DAYS_IN_YEAR * prev + prev.div_euclid(4) - prev.div_euclid(100)
            + prev.div_euclid(400)
            + n,
    )
}

/// Inverse of [`jdn_from_gregorian`].
pub(crate) fn gregorian_from_jdn(jdn: Jdn) -> Result<GregorianDate, CalendarError> {
    let days = jdn.get().saturating_sub(JD_EPOCH_OFFSET_GREGORIAN);
    let cycles = days.div_euclid(DAYS_IN_400_YEARS);
    let r400 = days.rem_euclid(DAYS_IN_400_YEARS);
    let centuries = r400 / DAYS_IN_100_YEARS;
    let r100 = r400 % DAYS_IN_100_YEARS;

    // The closing leap day of a 400-year cycle spills into a fifth century
    if r100 == 0 && r400 != 0 && centuries == 4 {
        let year = year_from_days(i64::from(GREGORIAN_CYCLE) * (cycles + 1))?;
        return Ok(GregorianDate {
            year,
            month: DECEMBER,
            day: 31,
        });
    }

    let r4 = r100 % DAYS_IN_4_YEARS;
    let leap_block = r4 / (DAYS_IN_4_YEARS - 1);
    // Zero-based day of the year
    let n = r4 % DAYS_IN_YEAR + DAYS_IN_YEAR * leap_block;
    let year = year_from_days(
        400 * cycles + 100 * centuries + 4 * (r100 / DAYS_IN_4_YEARS) + r4 / DAYS_IN_YEAR
            - leap_block
            + 1,
    )?;

    let s = i64::from(is_gregorian_leap_year(year));
    let t = (364 + s - n) / 306;
    let provisional = t * (n / 31 + 1) + (1 - t) * ((5 * (n - s) + 13) / 153 + 1);

    let table = gregorian_month_table(year);
    let mut month = 1;
    let mut day = n + 1;
    while month < GREGORIAN_MONTHS && day > i64::from(table[usize::from(month)]) {
        day -= i64::from(table[usize::from(month)]);
        month += 1;
    }
    debug_assert_eq!(i64::from(month), provisional, "month walk disagrees for {jdn}");

    Ok(GregorianDate::new(year, month, field(day))?)
}
