//! Greedy fallback slot search over fixed working days.
//!
//! Backs the single-user "suggest a time" endpoint when no per-user
//! availability template is known: Monday to Friday, 09:00-17:00 in the
//! request's frame, probing a fixed 30-minute grid day by day. Callers
//! with recurring windows should prefer [`crate::slots::generate_slots`].

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Timelike, Utc, Weekday};
use tracing::debug;

use crate::error::{Result, SlotError};
use crate::interval::TimeRange;

pub const DEFAULT_LOOK_AHEAD_DAYS: u32 = 14;

const WORK_START_MINUTES: i64 = 9 * 60;
const WORK_END_MINUTES: i64 = 17 * 60;
const PROBE_MINUTES: i64 = 30;

/// Find the first collision-free `[start, start + duration)` range within
/// the look-ahead horizon, or `Ok(None)` when every probe collides.
///
/// Probes advance in fixed 30-minute increments irrespective of the
/// requested duration. For day zero a `now` past 17:00 skips to the next
/// day, and a `now` past 09:00 rounds the first probe up to the next
/// 30-minute boundary.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` when `duration_minutes <= 0`.
pub fn suggest_slot(
    busy: &[TimeRange],
    now: DateTime<Utc>,
    duration_minutes: i64,
    look_ahead_days: u32,
) -> Result<Option<TimeRange>> {
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    let duration = Duration::minutes(duration_minutes);
    let today = now.date_naive();

    for day_offset in 0..i64::from(look_ahead_days) {
        let day = today + Duration::days(day_offset);
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }

        let midnight = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));

        let mut probe_minutes = WORK_START_MINUTES;
        if day_offset == 0 {
            let mut now_minutes = i64::from(now.hour()) * 60 + i64::from(now.minute());
            if now.second() > 0 || now.timestamp_subsec_nanos() > 0 {
                now_minutes += 1;
            }
            if now_minutes >= WORK_END_MINUTES {
                continue;
            }
            if now_minutes > WORK_START_MINUTES {
                probe_minutes = ((now_minutes + PROBE_MINUTES - 1) / PROBE_MINUTES) * PROBE_MINUTES;
            }
        }

        let day_window = TimeRange {
            start: midnight,
            end: midnight + Duration::days(1),
        };
        let day_busy: Vec<TimeRange> = busy
            .iter()
            .filter(|event| event.overlaps(&day_window))
            .copied()
            .collect();

        while probe_minutes + duration_minutes <= WORK_END_MINUTES {
            let start = midnight + Duration::minutes(probe_minutes);
            let probe = TimeRange {
                start,
                end: start + duration,
            };
            if !day_busy.iter().any(|event| collides(&probe, event)) {
                return Ok(Some(probe));
            }
            probe_minutes += PROBE_MINUTES;
        }
    }

    debug!(look_ahead_days, "no free probe within the look-ahead horizon");
    Ok(None)
}

/// The three collision conditions: probe starts inside the event, probe
/// ends inside the event, or the probe envelopes the event.
fn collides(probe: &TimeRange, event: &TimeRange) -> bool {
    (probe.start >= event.start && probe.start < event.end)
        || (probe.end > event.start && probe.end <= event.end)
        || (probe.start <= event.start && probe.end >= event.end)
}
