use crate::consts::{
    DAYS_IN_4_YEARS, DAYS_IN_YEAR, ETHIOPIAN_MONTH_DAYS, ETHIOPIAN_MONTHS, MIN_DAY,
};
use crate::names::AMHARIC_MONTHS;
use crate::prelude::*;
use crate::types::{
    check_month, check_year, days_in_ethiopian_month, field, is_ethiopian_leap_year, parse_ymd,
    year_from_days, Era, Jdn, Weekday,
};
use crate::{CalendarError, DateError, GregorianDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date in the Ethiopian (Ge'ez) calendar.
///
/// Twelve months of 30 days are followed by Pagume, which has 5 days, or 6 in
/// a leap year. Positive years count from the Amete Mihret epoch; years `<= 0`
/// count from the Amete Alem epoch (see [`Era`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct EthiopianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl EthiopianDate {
    /// Creates a new Ethiopian date, validating every field
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` for fields outside the calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        check_year(year)?;
        check_month(month, ETHIOPIAN_MONTHS)?;
        if day < MIN_DAY || day > days_in_ethiopian_month(year, month) {
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

    /// Era the year is counted in
    pub const fn era(&self) -> Era {
        Era::for_ethiopian_year(self.year)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_ethiopian_leap_year(self.year)
    }

    /// Amharic name of the month, from the standard table
    pub const fn month_name(&self) -> &'static str {
        AMHARIC_MONTHS[(self.month - 1) as usize]
    }

    /// Julian Day Number of this date, counted from its era
    pub const fn to_jdn(&self) -> Jdn {
        jdn_from_ethiopian(self.year, self.month, self.day, self.era())
    }

    /// Ethiopian date falling on `jdn`
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the year would leave
    /// `MIN_YEAR..=MAX_YEAR`, and `CalendarError::EraCollision` for days before
    /// the Amete Mihret epoch whose Amete Alem year is positive.
    pub fn from_jdn(jdn: Jdn) -> Result<Self, CalendarError> {
        ethiopian_from_jdn(jdn)
    }

    /// Converts to the Gregorian calendar
    ///
    /// # Errors
    /// See [`GregorianDate::from_jdn`].
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        let jdn = self.to_jdn();
        let converted = GregorianDate::from_jdn(jdn)?;
        log::trace!(
            "ethiopian {self} ({}) -> jdn {jdn} -> gregorian {converted}",
            self.era()
        );
        Ok(converted)
    }

    pub const fn weekday(&self) -> Weekday {
        self.to_jdn().weekday()
    }
}

impl From<EthiopianDate> for Jdn {
    fn from(date: EthiopianDate) -> Self {
        date.to_jdn()
    }
}

impl FromStr for EthiopianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for EthiopianDate {
    type Error = DateError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EthiopianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// JDN of an Ethiopian date counted from `era`.
///
/// Month and day are not checked here; out-of-range values shift the result.
pub(crate) const fn jdn_from_ethiopian(year: i32, month: u8, day: u8, era: Era) -> Jdn {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    Jdn::new(
        era.offset() + DAYS_IN_YEAR + DAYS_IN_YEAR * (y - 1) + y.div_euclid(4)
            + ETHIOPIAN_MONTH_DAYS as i64 * m
            + d
            - 31,
    )
}

/// Inverse of [`jdn_from_ethiopian`], picking the era from the day itself.
pub(crate) fn ethiopian_from_jdn(jdn: Jdn) -> Result<EthiopianDate, CalendarError> {
    let era = Era::for_jdn(jdn);
    let days = jdn.get().saturating_sub(era.offset());
    let r = days.rem_euclid(DAYS_IN_4_YEARS);
    let leap_day = r / (DAYS_IN_4_YEARS - 1);
    // Zero-based day of the year
    let n = r % DAYS_IN_YEAR + DAYS_IN_YEAR * leap_day;
    let year = year_from_days(4 * days.div_euclid(DAYS_IN_4_YEARS) + r / DAYS_IN_YEAR - leap_day)?;

    if era == Era::AmeteAlem && year > 0 {
        log::debug!("jdn {jdn} falls in Amete Alem year {year}, before the Amete Mihret epoch");
        return Err(CalendarError::EraCollision { year, jdn });
    }

    let month_days = i64::from(ETHIOPIAN_MONTH_DAYS);
    Ok(EthiopianDate::new(
        year,
        field(n / month_days + 1),
        field(n % month_days + 1),
    )?)
}
