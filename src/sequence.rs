//! Full-year date sequence generation.

use crate::consts::{DAYS_PER_WEEK, DECEMBER, JANUARY};
use crate::week::monday_of_iso_week;
use crate::{IsoDate, ParseError};

/// Returns every date of ISO year `year` in ascending order.
///
/// The sequence starts on the Monday that begins ISO week 1 (the week
/// containing January 4) and ends on the Sunday that closes the final week
/// (the week containing December 28), so its first and last entries may lie
/// in the neighboring Gregorian years. The length is always a multiple of 7:
/// 364 for a 52-week year, 371 for a 53-week year.
///
/// Iteration happens on plain day counts, so no step can be stretched or
/// skipped by a clock change.
///
/// # Errors
/// Returns `ParseError::InvalidYear` if `year` is outside 1..=9999, and
/// `ParseError::OutOfRange` for year 9999, whose final week runs past the
/// supported span.
pub fn dates_for_iso_year(year: u16) -> Result<Vec<IsoDate>, ParseError> {
    // ISO week 1 is the week containing January 4
    let start = monday_of_iso_week(IsoDate::new(year, JANUARY, 4)?).day_number();
    // December 28 is always in the last ISO week; one week past its Monday
    // is the exclusive upper bound
    let end = monday_of_iso_week(IsoDate::new(year, DECEMBER, 28)?).day_number()
        + DAYS_PER_WEEK as i64;

    let mut dates = Vec::with_capacity((end - start) as usize);
    for day_number in start..end {
        dates.push(IsoDate::try_from_day_number(day_number)?);
    }
    Ok(dates)
}
