use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{SlotError, SlotResult};

// `9` stands for any ASCII digit; every other byte must match literally.
const DATE_SHAPE: &str = "9999-99-99";
const MINUTE_SHAPE: &str = "99:99";
const SECOND_SHAPE: &str = "99:99:99";

/// An inclusive range of calendar days.
///
/// A range whose `from` lies after `to` is valid and contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Parses both bounds of a range as supplied by a client.
    ///
    /// Each bound must be an ISO 8601 date (`2024-01-01`). A combined
    /// date-time (`2024-01-01T08:30`) is tolerated and truncated to its date.
    ///
    /// # Errors
    ///
    /// Returns `SlotError::Parse` naming the offending field when either
    /// bound cannot be read as a date.
    pub fn parse(date_from: &str, date_to: &str) -> SlotResult<Self> {
        let from = parse_date("date_from", date_from)?;
        let to = parse_date("date_to", date_to)?;
        Ok(Self { from, to })
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Every day from `from` to `to` inclusive, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from.iter_days().take_while(move |day| *day <= self.to)
    }
}

fn parse_date(field: &'static str, input: &str) -> SlotResult<NaiveDate> {
    let parse_error = |source| SlotError::Parse {
        field,
        input: input.to_string(),
        source,
    };

    let (date_part, time_part) = match input.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (input, None),
    };

    // chrono's own parsers tolerate padding-free fields, signs and spaces
    if !matches_shape(date_part, DATE_SHAPE) || !time_part.is_none_or(is_iso_time) {
        return Err(parse_error(None));
    }

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|err| parse_error(Some(err)))?;

    if let Some(time) = time_part {
        let format = if matches_shape(time, MINUTE_SHAPE) {
            "%H:%M"
        } else {
            "%H:%M:%S%.f"
        };
        NaiveTime::parse_from_str(time, format).map_err(|err| parse_error(Some(err)))?;
    }

    Ok(date)
}

/// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff` with at least one fractional digit.
fn is_iso_time(time: &str) -> bool {
    match time.split_once('.') {
        Some((whole, fraction)) => {
            matches_shape(whole, SECOND_SHAPE)
                && !fraction.is_empty()
                && fraction.bytes().all(|b| b.is_ascii_digit())
        }
        None => matches_shape(time, MINUTE_SHAPE) || matches_shape(time, SECOND_SHAPE),
    }
}

fn matches_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(byte, expected)| match expected {
            b'9' => byte.is_ascii_digit(),
            _ => byte == expected,
        })
}

/// A half-open span of naive local time during which no slot may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusyInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// `start <= instant < end`
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}
