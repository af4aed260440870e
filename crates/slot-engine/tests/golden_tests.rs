//! Tests for golden-hour computation across timezones.
//!
//! 2026-04-06 falls inside both US daylight saving (EDT/PDT, since Mar 8)
//! and UK summer time (BST, since Mar 29), so the local offsets used
//! below are the summer ones.

use chrono::{NaiveDate, TimeZone, Utc};
use slot_engine::error::SlotError;
use slot_engine::golden::{find_golden_hours, UserTimezoneProfile};

fn profile(user_id: &str, timezone: &str, start: f64, end: f64) -> UserTimezoneProfile {
    UserTimezoneProfile {
        user_id: user_id.to_string(),
        timezone: timezone.to_string(),
        work_start_hour: start,
        work_end_hour: end,
    }
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 6).unwrap()
}

// ── Roster edge cases ───────────────────────────────────────────────────────

#[test]
fn empty_roster_yields_no_ranges() {
    let ranges = find_golden_hours(&[], reference_date()).unwrap();
    assert!(ranges.is_empty());
}

#[test]
fn single_utc_user_gets_their_own_working_hours() {
    let users = vec![profile("u1", "UTC", 9.0, 17.0)];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, Utc.with_ymd_and_hms(2026, 4, 6, 9, 0, 0).unwrap());
    assert_eq!(ranges[0].end, Utc.with_ymd_and_hms(2026, 4, 6, 17, 0, 0).unwrap());
}

#[test]
fn invalid_timezone_fails_fast() {
    let users = vec![
        profile("u1", "UTC", 9.0, 17.0),
        profile("u2", "Mars/Olympus_Mons", 9.0, 17.0),
    ];
    let err = find_golden_hours(&users, reference_date()).unwrap_err();
    assert!(matches!(err, SlotError::InvalidTimezone(_)));
}

// ── Cross-timezone intersection ─────────────────────────────────────────────

#[test]
fn new_york_and_london_share_an_afternoon_window() {
    // NY 09:00-17:00 EDT = 13:00-21:00 UTC; London 09:00-17:00 BST =
    // 08:00-16:00 UTC. Intersection: 13:00-16:00 UTC.
    let users = vec![
        profile("ny", "America/New_York", 9.0, 17.0),
        profile("ldn", "Europe/London", 9.0, 17.0),
    ];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, Utc.with_ymd_and_hms(2026, 4, 6, 13, 0, 0).unwrap());
    assert_eq!(ranges[0].end, Utc.with_ymd_and_hms(2026, 4, 6, 16, 0, 0).unwrap());
}

#[test]
fn tokyo_and_los_angeles_share_nothing() {
    // Tokyo 09:00-17:00 JST = 00:00-08:00 UTC; LA 09:00-17:00 PDT =
    // 16:00-24:00 UTC. No overlap.
    let users = vec![
        profile("tyo", "Asia/Tokyo", 9.0, 17.0),
        profile("la", "America/Los_Angeles", 9.0, 17.0),
    ];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert!(ranges.is_empty());
}

#[test]
fn three_user_roster_narrows_the_window() {
    // Berlin 09:00-17:00 CEST = 07:00-15:00 UTC narrows the NY/London
    // window (13:00-16:00) down to 13:00-15:00.
    let users = vec![
        profile("ny", "America/New_York", 9.0, 17.0),
        profile("ldn", "Europe/London", 9.0, 17.0),
        profile("ber", "Europe/Berlin", 9.0, 17.0),
    ];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, Utc.with_ymd_and_hms(2026, 4, 6, 13, 0, 0).unwrap());
    assert_eq!(ranges[0].end, Utc.with_ymd_and_hms(2026, 4, 6, 15, 0, 0).unwrap());
}

// ── Working-hour boundaries ─────────────────────────────────────────────────

#[test]
fn fractional_working_hours_align_to_ticks() {
    let users = vec![profile("u1", "UTC", 9.5, 10.0)];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, Utc.with_ymd_and_hms(2026, 4, 6, 9, 30, 0).unwrap());
    assert_eq!(ranges[0].end, Utc.with_ymd_and_hms(2026, 4, 6, 10, 0, 0).unwrap());
}

#[test]
fn work_end_is_exclusive() {
    // The 17:00 tick itself is outside [9.0, 17.0).
    let users = vec![profile("u1", "UTC", 9.0, 17.0)];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert_eq!(ranges[0].end, Utc.with_ymd_and_hms(2026, 4, 6, 17, 0, 0).unwrap());
}

#[test]
fn all_day_hours_span_the_whole_scan() {
    // A run still open at the last tick closes at the next UTC midnight.
    let users = vec![profile("u1", "UTC", 0.0, 24.0)];
    let ranges = find_golden_hours(&users, reference_date()).unwrap();

    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].start, Utc.with_ymd_and_hms(2026, 4, 6, 0, 0, 0).unwrap());
    assert_eq!(ranges[0].end, Utc.with_ymd_and_hms(2026, 4, 7, 0, 0, 0).unwrap());
}

#[test]
fn weekend_is_not_excluded() {
    // 2026-04-04 is a Saturday; the finder deliberately ignores weekdays.
    let saturday = NaiveDate::from_ymd_opt(2026, 4, 4).unwrap();
    let users = vec![profile("u1", "UTC", 9.0, 17.0)];
    let ranges = find_golden_hours(&users, saturday).unwrap();

    assert_eq!(ranges.len(), 1);
}
