/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Characters that may separate a date from a time-of-day suffix
pub const DATETIME_SEPARATORS: [char; 2] = ['T', ' '];
/// Week number prefix in the ISO 8601 week format (e.g. "2021-W05")
pub const WEEK_PREFIX: char = 'W';

/// Days in an ISO week (Monday through Sunday)
pub const DAYS_PER_WEEK: usize = 7;
/// Weeks in a regular quarter
pub const WEEKS_PER_QUARTER: usize = 13;
/// Days in a regular quarter
pub const DAYS_PER_QUARTER: usize = DAYS_PER_WEEK * WEEKS_PER_QUARTER;
/// Quarters in a year
pub const QUARTERS_PER_YEAR: usize = 4;
/// Chunks in a quarter
pub const CHUNKS_PER_QUARTER: usize = 4;
/// Weeks in each of the first three chunks of a quarter
pub const WEEKS_PER_CHUNK: usize = 4;
/// Week count of a long ISO year
pub const LONG_YEAR_WEEKS: usize = 53;
/// Highest valid ISO week number (long years only)
pub const MAX_ISO_WEEK: u8 = 53;

/// ISO weekday index of Thursday (Monday = 0)
pub(crate) const THURSDAY_INDEX: i64 = 3;
