//! Reconstruction of a series block's time axis from its header.

use crate::decoding::error::DecodeError;
use chrono::{DateTime, Utc};

/// Evenly spaced, offset-shifted timestamps of one series block.
///
/// The index is stored as `(first, interval, len)` and materialized on demand,
/// so validating a block never allocates for its header alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeIndex {
    first: i64,
    interval: i64,
    len: usize,
}

impl TimeIndex {
    /// Builds the timestamps `start + utc_offset`, stepping by `interval` while
    /// the timestamp stays below `end + utc_offset`.
    ///
    /// The range is left-inclusive and right-open, so the index has
    /// `ceil((end - start) / interval)` entries.
    ///
    /// # Errors
    ///
    /// * [`DecodeError::NonPositiveInterval`] if `interval <= 0`.
    /// * [`DecodeError::EndBeforeStart`] if `end < start`.
    /// * [`DecodeError::TimestampOverflow`] if a timestamp does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use openmeteo_frames::TimeIndex;
    ///
    /// let index = TimeIndex::build(0, 3600, 900, 3600).unwrap();
    /// assert_eq!(index.to_vec(), vec![3600, 4500, 5400, 6300]);
    /// ```
    pub fn build(start: i64, end: i64, interval: i64, utc_offset: i64) -> Result<Self, DecodeError> {
        if interval <= 0 {
            return Err(DecodeError::NonPositiveInterval(interval));
        }
        if end < start {
            return Err(DecodeError::EndBeforeStart { start, end });
        }

        let overflow = || DecodeError::TimestampOverflow {
            start,
            end,
            interval,
            utc_offset,
        };

        let span = end as i128 - start as i128;
        let step = interval as i128;
        let steps = (span + step - 1) / step;
        let len = usize::try_from(steps).map_err(|_| overflow())?;

        let first = start as i128 + utc_offset as i128;
        if len == 0 {
            return Ok(Self {
                first: i64::try_from(first).unwrap_or(start),
                interval,
                len,
            });
        }

        let last = first + (steps - 1) * step;
        let first = i64::try_from(first).map_err(|_| overflow())?;
        i64::try_from(last).map_err(|_| overflow())?;

        Ok(Self {
            first,
            interval,
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn interval(&self) -> i64 {
        self.interval
    }

    pub fn first(&self) -> Option<i64> {
        self.get(0)
    }

    pub fn last(&self) -> Option<i64> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Timestamp of row `row`, in offset-shifted epoch seconds.
    pub fn get(&self, row: usize) -> Option<i64> {
        (row < self.len).then(|| self.at(row))
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len).map(move |row| self.at(row))
    }

    // `build` checked that the last row fits, so every row in range does too.
    fn at(&self, row: usize) -> i64 {
        (self.first as i128 + row as i128 * self.interval as i128) as i64
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    /// Timestamps as `DateTime<Utc>` values carrying the local wall-clock time.
    ///
    /// Returns `None` if any timestamp is outside the range chrono can represent.
    pub fn datetimes(&self) -> Option<Vec<DateTime<Utc>>> {
        self.iter()
            .map(|secs| DateTime::from_timestamp(secs, 0))
            .collect()
    }
}
