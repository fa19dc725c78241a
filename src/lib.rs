mod consts;
mod grouping;
mod partition;
mod prelude;
mod sequence;
mod types;
mod week;

pub use consts::*;
pub use grouping::{WeekGroup, group_by_iso_week};
pub use partition::{
    Chunk, ChunkedQuarter, Quarter, Week, split_into_quarters, split_into_quarters_with_chunks,
};
pub use sequence::dates_for_iso_year;
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use week::{IsoWeek, WeekError, iso_week_info, iso_weeks_in_year, monday_of_iso_week};

use crate::prelude::*;
use std::str::FromStr;

/// A proleptic-Gregorian calendar date with validated components.
/// This is the value all week and quarter computations operate on;
/// no time-of-day or timezone is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct IsoDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Date outside the supported range (years 1-{})", MAX_YEAR)]
    OutOfRange,
}

impl std::error::Error for ParseError {}

impl IsoDate {
    /// Creates a date from year, month and day, validating every component.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range for the
    /// Gregorian calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = types::Year::new(year)?;
        let month_nz = types::Month::new(month)?;
        let day_nz = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// Returns the year (1..=9999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns `(year, month, day)` as plain integers
    pub const fn to_parts(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Whether this date is the first day of its month
    pub const fn is_first_of_month(&self) -> bool {
        self.day.get() == MIN_DAY
    }

    /// Returns the day of the week this date falls on.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_iso_index(weekday_index_of(self.day_number()))
    }

    /// Adds (or subtracts, when negative) a number of whole days.
    ///
    /// Returns `None` when the result would leave the supported year range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        let day_number = self.day_number().checked_add(days)?;
        Self::try_from_day_number(day_number).ok()
    }

    /// Days since 1970-01-01. All internal stepping and weekday math runs on
    /// this representation, so a "day" is always exactly one increment and
    /// never subject to clock or zone adjustments.
    pub(crate) fn day_number(&self) -> i64 {
        days_from_civil(
            i32::from(self.year.get()),
            self.month.get(),
            self.day.get(),
        )
    }

    /// Converts a day number back to a date.
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` when the day number falls outside
    /// years 1..=9999.
    pub(crate) fn try_from_day_number(day_number: i64) -> Result<Self, ParseError> {
        let (year, month, day) = civil_from_days(day_number);
        match u16::try_from(year) {
            Ok(y @ 1..=MAX_YEAR) => Self::new(y, month, day),
            _ => Err(ParseError::OutOfRange),
        }
    }
}

impl TryFrom<(u16, u8, u8)> for IsoDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for IsoDate {
    type Err = ParseError;

    /// Parses an ISO 8601 date string, `YYYY-MM-DD`.
    ///
    /// This is the single entry point for external date/datetime strings:
    /// a time-of-day suffix introduced by `T` or a space (e.g.
    /// `2024-01-15T10:30:00Z`) is cut off and the calendar date is taken
    /// exactly as written. No timezone conversion is applied; the time and
    /// any offset are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let date_part = match trimmed.split_once(DATETIME_SEPARATORS) {
            Some((date, _time)) => date,
            None => trimmed,
        };

        let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        // Parse components - InvalidFormat if not numeric
        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IsoDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

// --- day-number arithmetic ---
//
// Gregorian dates map to days since 1970-01-01 through the standard
// 400-year-era decomposition (146097 days per era). Computing on plain
// day counts keeps every step of week anchoring and sequence generation
// independent of clocks, zones and DST.

const DAYS_PER_ERA: i64 = 146_097;
/// Day number of 0000-03-01 relative to 1970-01-01, negated; shifts the
/// era origin to March 1 so leap days land at the end of the cycle.
const EPOCH_SHIFT: i64 = 719_468;

pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= FEBRUARY);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = i64::from(month) + if month > FEBRUARY { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

pub(crate) fn civil_from_days(day_number: i64) -> (i32, u8, u8) {
    let z = day_number + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= FEBRUARY);
    (year as i32, month, day)
}

/// ISO weekday index (Monday = 0) of a day number; day 0 (1970-01-01) is a
/// Thursday.
pub(crate) fn weekday_index_of(day_number: i64) -> u8 {
    (day_number + THURSDAY_INDEX).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> IsoDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_valid() {
        let d = IsoDate::new(2024, 8, 15).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 8);
        assert_eq!(d.day(), 15);
        assert_eq!(d.to_parts(), (2024, 8, 15));
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            IsoDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            IsoDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            IsoDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_parse_iso_date() {
        let d = date("2024-08-15");
        assert_eq!(d, IsoDate::new(2024, 8, 15).unwrap());
    }

    #[test]
    fn test_parse_with_whitespace() {
        let d = " 2024-08-15 ".parse::<IsoDate>().unwrap();
        assert_eq!(d.to_parts(), (2024, 8, 15));
    }

    #[test]
    fn test_parse_timestamp_truncation() {
        // The date component is taken as written; time and offset are ignored
        assert_eq!(date("2024-01-15T10:30:00Z"), date("2024-01-15"));
        assert_eq!(date("2024-01-15T23:59:59+13:45"), date("2024-01-15"));
        assert_eq!(date("2024-01-15 08:00"), date("2024-01-15"));
    }

    #[test]
    fn test_parse_invalid_format() {
        assert!(matches!(
            "".parse::<IsoDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "   ".parse::<IsoDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024-01".parse::<IsoDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-15-23".parse::<IsoDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-XX".parse::<IsoDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "01/15/2024".parse::<IsoDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_invalid_components() {
        assert!(matches!(
            "2024-13-01".parse::<IsoDate>(),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2024-02-30".parse::<IsoDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            "0000-01-01".parse::<IsoDate>(),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(date("2024-08-15").to_string(), "2024-08-15");
        assert_eq!(IsoDate::new(33, 1, 2).unwrap().to_string(), "0033-01-02");
    }

    #[test]
    fn test_ordering() {
        assert!(date("2023-12-31") < date("2024-01-01"));
        assert!(date("2024-01-31") < date("2024-02-01"));
        assert!(date("2024-02-01") < date("2024-02-02"));
        assert_eq!(date("2024-02-02"), date("2024-02-02"));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date("2024-08-15");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-08-15""#);
        let parsed: IsoDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<IsoDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<IsoDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_try_from_tuple() {
        let d: IsoDate = (2024, 8, 15).try_into().unwrap();
        assert_eq!(d, date("2024-08-15"));

        let result: Result<IsoDate, _> = (2024, 2, 30).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_first_of_month() {
        assert!(date("2024-03-01").is_first_of_month());
        assert!(!date("2024-03-02").is_first_of_month());
        assert!(!date("2024-03-31").is_first_of_month());
    }

    #[test]
    fn test_weekday_known_dates() {
        assert_eq!(date("1970-01-01").weekday(), Weekday::Thursday);
        assert_eq!(date("2000-01-01").weekday(), Weekday::Saturday);
        assert_eq!(date("2024-01-01").weekday(), Weekday::Monday);
        assert_eq!(date("2024-12-31").weekday(), Weekday::Tuesday);
        assert_eq!(date("0001-01-01").weekday(), Weekday::Monday);
        assert_eq!(date("9999-12-31").weekday(), Weekday::Friday);
    }

    #[test]
    fn test_day_number_epoch() {
        assert_eq!(date("1970-01-01").day_number(), 0);
        assert_eq!(date("1970-01-02").day_number(), 1);
        assert_eq!(date("1969-12-31").day_number(), -1);
        assert_eq!(date("2000-01-01").day_number(), 10_957);
    }

    #[test]
    fn test_day_number_roundtrip_span_edges() {
        for s in ["0001-01-01", "1582-10-15", "1970-01-01", "2024-02-29", "9999-12-31"] {
            let d = date(s);
            assert_eq!(IsoDate::try_from_day_number(d.day_number()).unwrap(), d);
        }
    }

    #[test]
    fn test_try_from_day_number_out_of_range() {
        let last = date("9999-12-31").day_number();
        assert!(matches!(
            IsoDate::try_from_day_number(last + 1),
            Err(ParseError::OutOfRange)
        ));
        let first = date("0001-01-01").day_number();
        assert!(matches!(
            IsoDate::try_from_day_number(first - 1),
            Err(ParseError::OutOfRange)
        ));
    }

    #[test]
    fn test_checked_add_days_within_month() {
        assert_eq!(
            date("2024-03-10").checked_add_days(5),
            Some(date("2024-03-15"))
        );
        assert_eq!(
            date("2024-03-10").checked_add_days(-9),
            Some(date("2024-03-01"))
        );
    }

    #[test]
    fn test_checked_add_days_leap_day() {
        assert_eq!(
            date("2024-02-28").checked_add_days(1),
            Some(date("2024-02-29"))
        );
        assert_eq!(
            date("2023-02-28").checked_add_days(1),
            Some(date("2023-03-01"))
        );
    }

    #[test]
    fn test_checked_add_days_year_boundary() {
        assert_eq!(
            date("2024-12-31").checked_add_days(1),
            Some(date("2025-01-01"))
        );
        assert_eq!(
            date("2025-01-01").checked_add_days(-1),
            Some(date("2024-12-31"))
        );
    }

    #[test]
    fn test_checked_add_days_at_span_limits() {
        assert_eq!(date("9999-12-31").checked_add_days(1), None);
        assert_eq!(date("0001-01-01").checked_add_days(-1), None);
        assert_eq!(
            date("0001-01-01").checked_add_days(0),
            Some(date("0001-01-01"))
        );
    }

    #[test]
    fn test_weekday_index_of_epoch_week() {
        // 1970-01-01 (day 0) was a Thursday
        assert_eq!(weekday_index_of(0), 3);
        // 1970-01-05 was the following Monday
        assert_eq!(weekday_index_of(4), 0);
        // negative day numbers wrap the same way
        assert_eq!(weekday_index_of(-3), 0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
        assert_eq!(
            ParseError::OutOfRange.to_string(),
            "Date outside the supported range (years 1-9999)"
        );
    }
}
