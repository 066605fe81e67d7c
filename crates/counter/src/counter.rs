//! Sunday-on-the-first counting over a configurable calendar.

use tracing::debug;

use crate::config::CounterConfig;
use crate::error::CounterError;
use crate::weekday::Weekday;

/// Number of distinct `(offset, leap)` combinations: 7 offsets x 2 leap states.
const TABLE_LEN: usize = 14;

/// Counts Sundays falling on the first day of a month, relative to a
/// reference year whose first weekday is known.
///
/// All state is derived once at construction and immutable afterwards. In
/// particular the per-`(offset, leap)` Sunday counts are precomputed into a
/// 14-entry table, so range queries cost a constant-time lookup per year and
/// a `Counter` can be shared across threads without synchronization.
///
/// Queries are answered by evaluating a cumulative count at the two range
/// boundaries and subtracting; the walk from the reference year is a strictly
/// sequential fold because each year's starting weekday depends on the leap
/// status of every year before it.
#[derive(Debug, Clone)]
pub struct Counter {
    /// Year the offset propagation starts from.
    ref_year: i32,
    /// Monday-origin weekday index of January 1 in `ref_year`.
    ref_offset: u32,
    /// Weekday shift a non-leap year imparts on the next year's January 1.
    offset_year: u32,
    /// Weekday shift a leap year imparts on the next year's January 1.
    offset_leap: u32,
    /// 1-based day-of-year of each month's first day, non-leap layout.
    firsts_year: [u32; 12],
    /// 1-based day-of-year of each month's first day, leap layout.
    firsts_leap: [u32; 12],
    /// Leap-ness rule for the configured calendar.
    leap_predicate: fn(i32) -> bool,
    /// Sundays-on-the-first per `(offset, leap)` key, indexed by
    /// `offset * 2 + leap`.
    counts: [u32; TABLE_LEN],
}

/// True iff day-of-year `day` is a Sunday in a year whose January 1 has the
/// given Monday-origin offset.
fn is_sunday(day: u32, offset: u32) -> bool {
    (day + offset) % 7 == 0
}

/// Table index for an `(offset, leap)` key.
fn table_index(offset: u32, leap: bool) -> usize {
    (offset * 2) as usize + leap as usize
}

/// Derives the 1-based day-of-year on which each month begins.
///
/// Month 1 always begins on day 1; each later month begins one layout entry
/// past the previous month's start (prefix sum over the first 11 entries).
fn first_days(layout: &[u32; 12]) -> [u32; 12] {
    let mut firsts = [1u32; 12];
    for m in 1..12 {
        firsts[m] = firsts[m - 1] + layout[m - 1];
    }
    firsts
}

/// Counts how many of the 12 month-start days are Sundays at `offset`.
fn count_first_sundays(firsts: &[u32; 12], offset: u32) -> u32 {
    firsts.iter().filter(|&&day| is_sunday(day, offset)).count() as u32
}

/// Rejects layouts containing a zero-length month.
fn validate_layout(layout: &[u32; 12], kind: &'static str) -> Result<(), CounterError> {
    for (i, &days) in layout.iter().enumerate() {
        if days == 0 {
            return Err(CounterError::InvalidMonthLength {
                month: i as u8 + 1,
                layout: kind,
            });
        }
    }
    Ok(())
}

impl Counter {
    /// Builds a counter from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::MissingRefYear`] or
    /// [`CounterError::MissingRefFirstDay`] if a required field is absent,
    /// [`CounterError::InvalidWeekday`] if the first-day name is not a
    /// recognized weekday, and [`CounterError::InvalidMonthLength`] if a
    /// layout contains a zero-length month.
    pub fn new(config: &CounterConfig) -> Result<Self, CounterError> {
        let ref_year = config.ref_year().ok_or(CounterError::MissingRefYear)?;
        let first_day_name = config
            .ref_first_day()
            .ok_or(CounterError::MissingRefFirstDay)?;
        let ref_offset = Weekday::from_name(first_day_name)?.offset();

        validate_layout(config.year_layout(), "year")?;
        validate_layout(config.leap_layout(), "leap")?;

        let offset_year = config.year_layout().iter().sum::<u32>() % 7;
        let offset_leap = config.leap_layout().iter().sum::<u32>() % 7;
        let firsts_year = first_days(config.year_layout());
        let firsts_leap = first_days(config.leap_layout());

        // The (offset, leap) domain has exactly 14 keys; filling the whole
        // table up front keeps every query lookup-only and the Counter
        // immutable.
        let mut counts = [0u32; TABLE_LEN];
        for offset in 0..7 {
            counts[table_index(offset, false)] = count_first_sundays(&firsts_year, offset);
            counts[table_index(offset, true)] = count_first_sundays(&firsts_leap, offset);
        }

        debug!(ref_year, ref_offset, offset_year, offset_leap, "counter ready");

        Ok(Self {
            ref_year,
            ref_offset,
            offset_year,
            offset_leap,
            firsts_year,
            firsts_leap,
            leap_predicate: config.leap_predicate(),
            counts,
        })
    }

    /// Returns the reference year.
    pub fn ref_year(&self) -> i32 {
        self.ref_year
    }

    /// Returns the Monday-origin offset of the reference year's January 1.
    pub fn ref_offset(&self) -> u32 {
        self.ref_offset
    }

    /// January 1 offset of the year following one with the given leap status
    /// and offset.
    fn next_offset(&self, leap: bool, offset: u32) -> u32 {
        let shift = if leap { self.offset_leap } else { self.offset_year };
        (offset + shift) % 7
    }

    /// Sundays on the first of a month for a year of the given kind and offset.
    fn sundays_for_year(&self, leap: bool, offset: u32) -> u64 {
        u64::from(self.counts[table_index(offset, leap)])
    }

    /// Cumulative count over `ref_year..=limit_year`.
    ///
    /// Walks year by year carrying the running total and the next January 1
    /// offset. A `limit_year` before `ref_year` yields an empty range and 0.
    fn total_since_ref(&self, limit_year: i32) -> u64 {
        let mut total = 0u64;
        let mut offset = self.ref_offset;
        for year in self.ref_year..=limit_year {
            let leap = (self.leap_predicate)(year);
            total += self.sundays_for_year(leap, offset);
            offset = self.next_offset(leap, offset);
        }
        total
    }

    /// Counts Sundays on the first of a month over `from_year..=to_year`.
    ///
    /// Computed as the difference of two cumulative counts from the reference
    /// year, so `from_year == ref_year` subtracts an empty prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::QueryBeforeRef`] if `from_year` precedes the
    /// reference year and [`CounterError::InvertedRange`] if `to_year`
    /// precedes `from_year`.
    pub fn total_sundays(&self, from_year: i32, to_year: i32) -> Result<u64, CounterError> {
        if from_year < self.ref_year {
            return Err(CounterError::QueryBeforeRef {
                from: from_year,
                ref_year: self.ref_year,
            });
        }
        if to_year < from_year {
            return Err(CounterError::InvertedRange {
                from: from_year,
                to: to_year,
            });
        }
        Ok(self.total_since_ref(to_year) - self.total_since_ref(from_year - 1))
    }
}
