//! # Busy-Interval Providers
//!
//! Slot generation asks a [`BusyIntervalProvider`] which parts of a date range
//! are already taken. The only implementation shipped today is
//! [`FixedDailyBlock`], a stand-in for a real calendar lookup.

use chrono::NaiveTime;

use crate::{
    errors::{SlotError, SlotResult},
    models::range::{BusyInterval, DateRange},
};

/// Source of busy intervals overlapping a date range.
///
/// Implementations must be cheap to share between requests; the API keeps a
/// single instance behind an `Arc`.
pub trait BusyIntervalProvider: Send + Sync {
    /// Returns the busy intervals that may overlap any day of `range`.
    ///
    /// # Errors
    ///
    /// Implementations backed by an external calendar report lookup failures
    /// as `SlotError::Calendar`.
    fn busy_between(&self, range: &DateRange) -> SlotResult<Vec<BusyInterval>>;
}

/// Blocks a single fixed time-of-day window on the first day of the range.
///
/// The window is anchored to `range.from` only, so later days of a multi-day
/// range are not blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDailyBlock {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl FixedDailyBlock {
    /// # Errors
    ///
    /// Returns `SlotError::Validation` when `start` is not before `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> SlotResult<Self> {
        if start >= end {
            return Err(SlotError::Validation(format!(
                "busy block start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }
}

impl Default for FixedDailyBlock {
    /// 13:00 to 14:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN + chrono::Duration::hours(13),
            end: NaiveTime::MIN + chrono::Duration::hours(14),
        }
    }
}

impl BusyIntervalProvider for FixedDailyBlock {
    fn busy_between(&self, range: &DateRange) -> SlotResult<Vec<BusyInterval>> {
        let anchor = range.from;
        Ok(vec![BusyInterval::new(
            anchor.and_time(self.start),
            anchor.and_time(self.end),
        )])
    }
}
