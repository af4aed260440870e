//! Bookable slot generation from weekly availability templates.
//!
//! Intersects a user's recurring wall-clock windows with aggregated busy
//! intervals to produce concrete `[start, start + duration)` slots on a
//! given date. Candidates advance at `duration + buffer` spacing, which
//! enforces the configured minimum gap between consecutive bookable slots
//! by construction; `buffer = 0` degenerates to back-to-back packing.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::aggregator::BusyInterval;
use crate::availability::WeeklyWindow;
use crate::error::{Result, SlotError};
use crate::interval::TimeRange;

/// Generate bookable slots for one user on one date.
///
/// `tz` is the availability owner's timezone: window bounds are wall-clock
/// only and must be anchored onto `date` in that zone before they can be
/// compared against the UTC busy intervals.
///
/// Windows whose day does not match `date`, or which are disabled, are
/// ignored; no matching window yields an empty list. Output is in
/// generation order across the windows as given, not globally re-sorted.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` when `duration_minutes <= 0` or
/// `buffer_minutes < 0`.
pub fn generate_slots(
    windows: &[WeeklyWindow],
    busy: &[BusyInterval],
    date: NaiveDate,
    tz: Tz,
    duration_minutes: i64,
    buffer_minutes: i64,
) -> Result<Vec<TimeRange>> {
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    if buffer_minutes < 0 {
        return Err(SlotError::InvalidDuration(buffer_minutes));
    }

    let duration = Duration::minutes(duration_minutes);
    let stride = Duration::minutes(duration_minutes + buffer_minutes);

    let mut slots = Vec::new();

    for window in windows
        .iter()
        .filter(|w| w.enabled && w.day_of_week == date.weekday())
    {
        let (Some(window_start), Some(window_end)) = (
            resolve_local(date, window.start, tz),
            resolve_local(date, window.end, tz),
        ) else {
            debug!(%date, %tz, "window bound falls in a DST gap, skipping window");
            continue;
        };
        if window_end <= window_start {
            continue;
        }

        let mut candidate = window_start;
        while candidate + duration <= window_end {
            let slot = TimeRange {
                start: candidate,
                end: candidate + duration,
            };
            if !busy.iter().any(|b| slot.overlaps(&b.range())) {
                slots.push(slot);
            }
            candidate += stride;
        }
    }

    Ok(slots)
}

/// Anchor a wall-clock time onto `date` in `tz` and convert to UTC.
///
/// An ambiguous local time (DST fall-back) resolves to the earlier
/// instant; a local time erased by a spring-forward gap yields `None`.
fn resolve_local(date: NaiveDate, time: NaiveTime, tz: Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}
