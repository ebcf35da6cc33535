//! Amharic month and weekday names, and the display format built from them.

use crate::{CalendarError, EthiopianDate};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Amharic Ethiopian month names, Meskerem (1) through Pagume (13)
pub const AMHARIC_MONTHS: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ህዳር",
    "ታህሳስ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሃሴ",
    "ጳጉሜ",
];

/// Amharic weekday names, Sunday first
pub const AMHARIC_WEEKDAYS: [&str; 7] = ["እሁድ", "ሰኞ", "ማክሰኞ", "ሮብ", "ሓሙስ", "ኣርብ", "ቅዳሜ"];

/// A lookup from month number (1-based) to a display name.
pub trait MonthNameTable {
    fn month_name(&self, month: u8) -> Option<&str>;
}

/// Position `i` names month `i + 1`.
impl MonthNameTable for [&str; 13] {
    fn month_name(&self, month: u8) -> Option<&str> {
        let index = usize::from(month).checked_sub(1)?;
        self.get(index).copied()
    }
}

impl<S: AsRef<str>> MonthNameTable for BTreeMap<u8, S> {
    fn month_name(&self, month: u8) -> Option<&str> {
        self.get(&month).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, H: BuildHasher> MonthNameTable for HashMap<u8, S, H> {
    fn month_name(&self, month: u8) -> Option<&str> {
        self.get(&month).map(AsRef::as_ref)
    }
}

/// Renders `date` as `"<month name> <DD>, <year>"`, e.g. `ጥር 21, 2004`.
///
/// # Errors
/// Returns `CalendarError::UnknownMonthKey` if `months` has no name for the
/// date's month.
pub fn format_ethiopian_date<T>(date: &EthiopianDate, months: &T) -> Result<String, CalendarError>
where
    T: MonthNameTable + ?Sized,
{
    let name = months
        .month_name(date.month())
        .ok_or(CalendarError::UnknownMonthKey(date.month()))?;
    Ok(format!("{name} {:02}, {}", date.day(), date.year()))
}
