//! Recurring weekly availability templates.
//!
//! A user's availability is a flat list of wall-clock windows keyed by day
//! of week, deliberately not a recurrence engine. Windows carry no date and
//! no zone; the slot generator anchors them onto a concrete date in the
//! owner's timezone.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// One recurring wall-clock window of bookable time.
///
/// Multiple windows per day are permitted. The model assumes, but does not
/// enforce, that windows for the same day do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWindow {
    pub day_of_week: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub enabled: bool,
}

impl WeeklyWindow {
    /// Build an enabled window, rejecting `start >= end`.
    pub fn new(day_of_week: Weekday, start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidWindow { start, end });
        }
        Ok(Self {
            day_of_week,
            start,
            end,
            enabled: true,
        })
    }

    /// Build a window from `HH:MM` wall-clock strings.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidClockTime` for a string that is not
    /// `HH:MM`, and `SlotError::InvalidWindow` when start is not before end.
    pub fn from_clock(day_of_week: Weekday, start: &str, end: &str) -> Result<Self> {
        Self::new(day_of_week, parse_clock(start)?, parse_clock(end)?)
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Parse a `HH:MM` wall-clock string. Never coerces: `9:00am`, `25:00`
/// and friends are rejected.
pub fn parse_clock(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| SlotError::InvalidClockTime(s.to_string()))
}
