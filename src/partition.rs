//! Positional partitioning of date sequences into quarters, weeks and
//! chunks.
//!
//! Both partitioners group purely by position: they never inspect the
//! calendar value of a date, so callers wanting calendar-aligned output must
//! supply a contiguous, ordered sequence (normally the output of
//! [`dates_for_iso_year`](crate::dates_for_iso_year)).

use crate::IsoDate;
use crate::consts::{
    CHUNKS_PER_QUARTER, DAYS_PER_QUARTER, DAYS_PER_WEEK, LONG_YEAR_WEEKS, QUARTERS_PER_YEAR,
    WEEKS_PER_CHUNK,
};

/// Seven consecutive dates (fewer for a trailing remainder)
pub type Week = Vec<IsoDate>;
/// A quarter's weeks: 13, or 14 for the last quarter of a long year
pub type Quarter = Vec<Week>;
/// A flat run of dates covering one or more whole weeks
pub type Chunk = Vec<IsoDate>;
/// A quarter as exactly four chunks
pub type ChunkedQuarter = Vec<Chunk>;

/// Splits `dates` into quarters of weeks.
///
/// Full 13-week quarters are emitted first. A leftover shorter than a
/// quarter (the 53rd week of a long year) is appended to the last quarter as
/// an extra week; if the input is shorter than a single quarter, the
/// leftover becomes the only week of the only quarter. A leftover shorter
/// than a week stays short - nothing is padded.
pub fn split_into_quarters(dates: &[IsoDate]) -> Vec<Quarter> {
    let mut full_quarters = dates.chunks_exact(DAYS_PER_QUARTER);
    let mut quarters: Vec<Quarter> = full_quarters
        .by_ref()
        .map(|quarter| {
            quarter
                .chunks(DAYS_PER_WEEK)
                .map(<[IsoDate]>::to_vec)
                .collect()
        })
        .collect();

    let leftover = full_quarters.remainder();
    if !leftover.is_empty() {
        let extra_week: Week = leftover.to_vec();
        match quarters.last_mut() {
            Some(last) => last.push(extra_week),
            None => quarters.push(vec![extra_week]),
        }
    }

    quarters
}

/// Splits `dates` into exactly four quarters of exactly four chunks each.
///
/// Chunks hold flat runs of dates, not week sub-groups. The first three
/// chunks of every quarter take four weeks; the final chunk takes one week,
/// except in the last quarter of a 53-week input where it takes two. When
/// the input runs out early the remaining chunks are left empty.
pub fn split_into_quarters_with_chunks(dates: &[IsoDate]) -> Vec<ChunkedQuarter> {
    let weeks: Vec<&[IsoDate]> = dates.chunks(DAYS_PER_WEEK).collect();
    let total_weeks = weeks.len();

    let mut quarters = Vec::with_capacity(QUARTERS_PER_YEAR);
    let mut next_week = 0;
    for quarter in 0..QUARTERS_PER_YEAR {
        let mut chunks: ChunkedQuarter = Vec::with_capacity(CHUNKS_PER_QUARTER);
        for chunk_index in 0..CHUNKS_PER_QUARTER {
            let mut chunk = Chunk::new();
            for _ in 0..weeks_in_chunk(quarter, chunk_index, total_weeks) {
                if let Some(week) = weeks.get(next_week) {
                    chunk.extend_from_slice(week);
                    next_week += 1;
                }
            }
            chunks.push(chunk);
        }
        quarters.push(chunks);
    }

    quarters
}

/// Week budget of one chunk slot.
fn weeks_in_chunk(quarter: usize, chunk_index: usize, total_weeks: usize) -> usize {
    if chunk_index < CHUNKS_PER_QUARTER - 1 {
        WEEKS_PER_CHUNK
    } else if quarter == QUARTERS_PER_YEAR - 1 && total_weeks == LONG_YEAR_WEEKS {
        // the 53rd week lands in the very last chunk
        2
    } else {
        1
    }
}
