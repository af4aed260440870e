//! Golden-hour computation across heterogeneous timezones.
//!
//! A golden hour is a UTC range in which every user in a roster is
//! simultaneously inside their own timezone-local working hours. The day
//! is scanned in fixed 15-minute ticks; each tick is tested against every
//! user's local wall clock and adjacent golden ticks merge into ranges.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::TimeRange;

const TICK_MINUTES: i64 = 15;
const TICKS_PER_DAY: i64 = 24 * 60 / TICK_MINUTES;

/// Working-hour profile for one roster member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTimezoneProfile {
    pub user_id: String,
    /// IANA timezone name, e.g. "Europe/Berlin".
    pub timezone: String,
    /// Start of working hours as a fractional local hour, e.g. 9.0.
    pub work_start_hour: f64,
    /// End of working hours as a fractional local hour, e.g. 17.0.
    pub work_end_hour: f64,
}

/// Find the UTC ranges on `reference_date` where every user in the roster
/// is inside their local working hours.
///
/// `reference_date` is treated as UTC midnight; the following 24 hours are
/// scanned in 15-minute ticks. A tick is golden only when every user's
/// local fractional hour-of-day lies in `[work_start_hour, work_end_hour)`.
/// An empty roster yields no ranges.
///
/// Known gap: day-of-week is not consulted, so a user whose hours match is
/// golden on their local Saturday too. Weekend exclusion is a possible
/// future refinement, deliberately not applied here.
///
/// # Errors
/// Returns `SlotError::InvalidTimezone` when any profile carries a name
/// that is not a valid IANA identifier.
pub fn find_golden_hours(
    users: &[UserTimezoneProfile],
    reference_date: NaiveDate,
) -> Result<Vec<TimeRange>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    // Validate every profile before scanning.
    let zones: Vec<Tz> = users
        .iter()
        .map(|u| {
            u.timezone
                .parse()
                .map_err(|_| SlotError::InvalidTimezone(u.timezone.clone()))
        })
        .collect::<Result<_>>()?;

    let midnight = Utc.from_utc_datetime(&reference_date.and_time(NaiveTime::MIN));
    let mut ranges: Vec<TimeRange> = Vec::new();
    let mut open: Option<DateTime<Utc>> = None;

    for i in 0..TICKS_PER_DAY {
        let instant = midnight + Duration::minutes(i * TICK_MINUTES);
        let golden = users.iter().zip(&zones).all(|(user, tz)| {
            let local = instant.with_timezone(tz);
            let hour = f64::from(local.hour()) + f64::from(local.minute()) / 60.0;
            user.work_start_hour <= hour && hour < user.work_end_hour
        });

        match (golden, open) {
            (true, None) => open = Some(instant),
            (false, Some(start)) => {
                ranges.push(TimeRange {
                    start,
                    end: instant,
                });
                open = None;
            }
            _ => {}
        }
    }

    // A run still open at the end of the scan closes at the day boundary.
    if let Some(start) = open {
        ranges.push(TimeRange {
            start,
            end: midnight + Duration::days(1),
        });
    }

    Ok(ranges)
}
