//! # Slot Generation
//!
//! Enumerates every hourly slot start inside the working window of each day in
//! a [`DateRange`], dropping the ones whose start falls inside a busy interval.
//!
//! The provider is queried once per request with the whole range. Its answer
//! does not depend on the individual slot, so the result is the same as asking
//! again for every candidate hour.

use chrono::NaiveDate;

use crate::{
    calendar::BusyIntervalProvider,
    errors::{SlotError, SlotResult},
    models::{
        range::{BusyInterval, DateRange},
        slot::Slot,
    },
};

/// Hours of the day at which slots may start, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    first_hour: u32,
    last_hour: u32,
}

impl WorkingHours {
    /// # Errors
    ///
    /// Returns `SlotError::Validation` if either hour is past 23 or the window
    /// is inverted.
    pub fn new(first_hour: u32, last_hour: u32) -> SlotResult<Self> {
        if last_hour > 23 || first_hour > last_hour {
            return Err(SlotError::Validation(format!(
                "invalid working hours {first_hour}..={last_hour}"
            )));
        }
        Ok(Self {
            first_hour,
            last_hour,
        })
    }

    pub fn first_hour(&self) -> u32 {
        self.first_hour
    }

    pub fn last_hour(&self) -> u32 {
        self.last_hour
    }

    /// Number of candidate slots per day.
    pub fn slots_per_day(&self) -> usize {
        (self.last_hour - self.first_hour + 1) as usize
    }

    /// Candidate slot starts on `day`, ascending.
    pub fn slots_on(&self, day: NaiveDate) -> impl Iterator<Item = Slot> {
        (self.first_hour..=self.last_hour)
            .filter_map(move |hour| day.and_hms_opt(hour, 0, 0))
            .map(Slot::new)
    }
}

impl Default for WorkingHours {
    /// Slots start at 09:00 through 17:00, so the last one ends at 18:00.
    fn default() -> Self {
        Self {
            first_hour: 9,
            last_hour: 17,
        }
    }
}

/// Generates the open slots of `range` within the default working hours.
///
/// # Errors
///
/// Propagates any failure of the busy-interval lookup.
pub fn generate_slots(
    range: &DateRange,
    provider: &dyn BusyIntervalProvider,
) -> SlotResult<Vec<Slot>> {
    generate_slots_within(range, WorkingHours::default(), provider)
}

/// Generates the open slots of `range` within `hours`, ascending by day then hour.
///
/// An inverted range yields an empty list without consulting the provider.
pub fn generate_slots_within(
    range: &DateRange,
    hours: WorkingHours,
    provider: &dyn BusyIntervalProvider,
) -> SlotResult<Vec<Slot>> {
    if range.is_empty() {
        return Ok(Vec::new());
    }

    let busy = provider.busy_between(range)?;

    Ok(range
        .days()
        .flat_map(|day| hours.slots_on(day))
        .filter(|slot| !is_busy(&busy, slot))
        .collect())
}

/// Parses a client-supplied range and generates its open slots.
///
/// # Errors
///
/// Returns `SlotError::Parse` when either bound is not an ISO date, or the
/// provider's error when the busy lookup fails.
pub fn available_slots(
    date_from: &str,
    date_to: &str,
    provider: &dyn BusyIntervalProvider,
) -> SlotResult<Vec<Slot>> {
    let range = DateRange::parse(date_from, date_to)?;
    generate_slots(&range, provider)
}

fn is_busy(busy: &[BusyInterval], slot: &Slot) -> bool {
    busy.iter().any(|interval| interval.contains(slot.start()))
}
