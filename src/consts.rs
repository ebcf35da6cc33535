/// Smallest accepted year (inclusive), shared by both calendars
pub const MIN_YEAR: i32 = -99_999;
/// Largest accepted year (inclusive), shared by both calendars
pub const MAX_YEAR: i32 = 99_999;

/// Last Gregorian month (December)
pub const GREGORIAN_MONTHS: u8 = 12;
/// Last Ethiopian month (Pagume)
pub const ETHIOPIAN_MONTHS: u8 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;
/// Month number for Pagume, the short thirteenth Ethiopian month
pub const PAGUME: u8 = 13;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in each of the first twelve Ethiopian months
pub const ETHIOPIAN_MONTH_DAYS: u8 = 30;
/// Days in Pagume for common years
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume for Ethiopian leap years
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days; callers copy the table and patch it per year
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// JDN offset of the Amete Mihret (ዓ/ም) era
pub const JD_EPOCH_OFFSET_AMETE_MIHRET: i64 = 1_723_856;
/// JDN offset of the Amete Alem (ዓ/ዓ) era
pub const JD_EPOCH_OFFSET_AMETE_ALEM: i64 = -285_019;
/// JDN offset of the proleptic Gregorian calendar (JDN of 0001-01-01)
pub const JD_EPOCH_OFFSET_GREGORIAN: i64 = 1_721_426;

/// Days in a common year
pub(crate) const DAYS_IN_YEAR: i64 = 365;
/// Days in a four-year cycle with one leap day
pub(crate) const DAYS_IN_4_YEARS: i64 = 1461;
/// Days in a Gregorian century without its closing leap day
pub(crate) const DAYS_IN_100_YEARS: i64 = 36_524;
/// Days in a full Gregorian cycle
pub(crate) const DAYS_IN_400_YEARS: i64 = 146_097;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Ethiopian leap years are the last of each four-year cycle
pub(crate) const ETHIOPIAN_LEAP_REMAINDER: i32 = 3;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
