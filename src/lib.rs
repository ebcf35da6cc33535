//! Conversion between the Ethiopian (Ge'ez) and Gregorian calendars.
//!
//! Every conversion goes through a Julian Day Number ([`Jdn`]): a date is
//! turned into its day number in one calendar and read back in the other.
//! All arithmetic is integer-only with floor division, so negative years and
//! day numbers behave the same way as positive ones.
//!
//! ```
//! use ethiopian_date::{AMHARIC_MONTHS, ethiopian_to_gregorian, format_ethiopian_date, gregorian_to_ethiopian};
//!
//! let gregorian = ethiopian_to_gregorian(2004, 5, 21).unwrap();
//! assert_eq!(gregorian.to_string(), "2012-01-30");
//!
//! let ethiopian = gregorian_to_ethiopian(2012, 1, 30).unwrap();
//! assert_eq!(ethiopian.to_string(), "2004-5-21");
//! assert_eq!(format_ethiopian_date(&ethiopian, &AMHARIC_MONTHS).unwrap(), "ጥር 21, 2004");
//! ```

mod consts;
mod ethiopian;
mod gregorian;
mod names;
mod prelude;
mod types;

pub use consts::*;
pub use ethiopian::EthiopianDate;
pub use gregorian::GregorianDate;
pub use names::{format_ethiopian_date, MonthNameTable, AMHARIC_MONTHS, AMHARIC_WEEKDAYS};
pub use types::{
    days_in_ethiopian_month, days_in_gregorian_month, is_ethiopian_leap_year,
    is_gregorian_leap_year, Era, Jdn, Weekday,
};

use crate::prelude::*;

/// A date field outside its calendar, or text that is not a date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}..={})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {month} (must be 1-{max})")]
    InvalidMonth { month: u8, max: u8 },
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

/// Error type for conversions and formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Invalid input date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Month has no entry in the name table.
    #[error("No month name for month {0}")]
    UnknownMonthKey(u8),

    /// Day number whose year cannot be represented.
    #[error("Year {0} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),

    /// Day before the Amete Mihret epoch whose Amete Alem year is positive,
    /// and would therefore be read back as an Amete Mihret year.
    #[error("Julian day {jdn} falls in Amete Alem year {year}, which collides with Amete Mihret numbering")]
    EraCollision { year: i32, jdn: Jdn },
}

/// Converts an Ethiopian date to the Gregorian calendar.
///
/// Years `<= 0` are read in the Amete Alem era, positive years in Amete Mihret.
///
/// # Errors
/// Returns `CalendarError::Date` for fields outside the Ethiopian calendar and
/// `CalendarError::YearOutOfRange` if the Gregorian year cannot be represented.
pub fn ethiopian_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, CalendarError> {
    EthiopianDate::new(year, month, day)?.to_gregorian()
}

/// Converts a proleptic Gregorian date to the Ethiopian calendar.
///
/// # Errors
/// Returns `CalendarError::Date` for fields outside the Gregorian calendar,
/// `CalendarError::EraCollision` for days between the Amete Alem and Amete
/// Mihret epochs, and `CalendarError::YearOutOfRange` if the Ethiopian year
/// cannot be represented.
pub fn gregorian_to_ethiopian(year: i32, month: u8, day: u8) -> Result<EthiopianDate, CalendarError> {
    GregorianDate::new(year, month, day)?.to_ethiopian()
}
