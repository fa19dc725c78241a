//! ISO 8601 week numbering.
//!
//! An ISO week runs Monday through Sunday and belongs to the year of its
//! Thursday, so dates near January 1 can carry a week of the neighboring
//! year.

use std::str::FromStr;

use crate::consts::{DAYS_PER_WEEK, DECEMBER, JANUARY, MAX_ISO_WEEK, THURSDAY_INDEX, WEEK_PREFIX};
use crate::prelude::*;
use crate::types::Year;
use crate::{IsoDate, ParseError, civil_from_days, days_from_civil, weekday_index_of};

/// An ISO week key: the week-based year and the week number within it.
///
/// Ordering is chronological (year first, then week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-W{:02}", year, week)]
pub struct IsoWeek {
    year: u16,
    week: u8,
}

/// Error type for ISO week operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// Week number outside 1..=53.
    #[error("Invalid week number: {week} (must be 1-{})", MAX_ISO_WEEK)]
    InvalidWeek { week: u8 },

    /// Error validating the year component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid week string format.
    #[error("Invalid week format: {0}")]
    InvalidFormat(String),
}

impl IsoWeek {
    /// Creates a week key with validation.
    ///
    /// # Errors
    /// Returns `WeekError` if the year is outside 1..=9999 or the week is
    /// outside 1..=53.
    pub fn new(year: u16, week: u8) -> Result<Self, WeekError> {
        let year = Year::new(year)?.get();
        if !(1..=MAX_ISO_WEEK).contains(&week) {
            return Err(WeekError::InvalidWeek { week });
        }
        Ok(Self { year, week })
    }

    /// Returns the ISO week-based year (1..=9999)
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the week number (1..=53)
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// Internal constructor for values the week algorithm already proved
    /// valid.
    pub(crate) const fn from_parts(year: u16, week: u8) -> Self {
        debug_assert!(week >= 1 && week <= MAX_ISO_WEEK);
        Self { year, week }
    }
}

impl FromStr for IsoWeek {
    type Err = WeekError;

    /// Parses the ISO 8601 week format, `YYYY-Www` (e.g. `2021-W05`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (year_part, week_part) = trimmed
            .split_once('-')
            .ok_or_else(|| WeekError::InvalidFormat(trimmed.to_owned()))?;
        let week_digits = week_part
            .strip_prefix(WEEK_PREFIX)
            .ok_or_else(|| WeekError::InvalidFormat(trimmed.to_owned()))?;

        let year = year_part
            .parse::<u16>()
            .map_err(|_| WeekError::InvalidFormat(trimmed.to_owned()))?;
        let week = week_digits
            .parse::<u8>()
            .map_err(|_| WeekError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, week)
    }
}

impl serde::Serialize for IsoWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IsoWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Returns the Monday that begins the ISO week containing `date`.
pub fn monday_of_iso_week(date: IsoDate) -> IsoDate {
    let monday = date.day_number() - i64::from(date.weekday().iso_index());
    // 0001-01-01 is a Monday, so the week anchor of any representable date
    // is itself representable.
    IsoDate::try_from_day_number(monday)
        .expect("Monday of a representable date's week is representable")
}

/// Returns the ISO week number and week-based year for `date`.
///
/// The week is the Monday-to-Sunday span containing `date`; the year is the
/// Gregorian year of that week's Thursday. Around January 1 the result can
/// name the previous or following year.
pub fn iso_week_info(date: IsoDate) -> IsoWeek {
    // Thursday of the current week determines the ISO year
    let thursday =
        date.day_number() + THURSDAY_INDEX - i64::from(date.weekday().iso_index());
    let (iso_year, _, _) = civil_from_days(thursday);

    // January 4th is always in week 1
    let jan4 = days_from_civil(iso_year, JANUARY, 4);
    let first_thursday = jan4 + THURSDAY_INDEX - i64::from(weekday_index_of(jan4));

    // Both day numbers are Thursdays, so the division is exact
    let week = 1 + (thursday - first_thursday) / DAYS_PER_WEEK as i64;

    debug_assert!((1..=i64::from(MAX_ISO_WEEK)).contains(&week));
    IsoWeek::from_parts(iso_year as u16, week as u8)
}

/// Returns how many ISO weeks `year` has: 52, or 53 for long years.
///
/// December 28 always falls in the year's final week, so its week number is
/// the count.
///
/// # Errors
/// Returns `ParseError::InvalidYear` if `year` is outside 1..=9999.
pub fn iso_weeks_in_year(year: u16) -> Result<u8, ParseError> {
    let dec28 = IsoDate::new(year, DECEMBER, 28)?;
    Ok(iso_week_info(dec28).week())
}
