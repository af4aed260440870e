//! Half-open time interval primitives.
//!
//! Every comparison in the engine happens after normalizing to UTC
//! instants. Overlap uses half-open `[start, end)` semantics: two ranges
//! where one ends exactly when the other starts do NOT overlap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// An absolute time range with half-open `[start, end)` semantics.
///
/// Invariant: `start < end`. [`TimeRange::new`] enforces it; the struct
/// fields stay public so internal call sites that already hold the
/// invariant can build ranges directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range, rejecting `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Strict overlap test. Adjacent ranges are not overlapping.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn envelops(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Hull of two ranges: earliest start to latest end.
    pub fn merge(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Merge overlapping or adjacent ranges into a sorted, non-overlapping list.
pub fn coalesce(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = ranges.to_vec();
    sorted.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in sorted {
        if let Some(last) = merged.last_mut() {
            if range.start <= last.end {
                // Overlapping or adjacent -- extend the current range.
                last.end = last.end.max(range.end);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Free gaps between busy ranges within a window.
///
/// Busy ranges may overlap -- they are clipped to the window and coalesced
/// before computing gaps. Returns gaps sorted by start time.
pub fn free_gaps(busy: &[TimeRange], window: TimeRange) -> Vec<TimeRange> {
    let clipped: Vec<TimeRange> = busy
        .iter()
        .filter(|b| b.start < window.end && b.end > window.start)
        .map(|b| TimeRange {
            start: b.start.max(window.start),
            end: b.end.min(window.end),
        })
        .collect();

    let merged = coalesce(&clipped);

    let mut gaps = Vec::new();
    let mut cursor = window.start;

    for range in &merged {
        if cursor < range.start {
            gaps.push(TimeRange {
                start: cursor,
                end: range.start,
            });
        }
        cursor = cursor.max(range.end);
    }

    // Trailing gap after the last busy range.
    if cursor < window.end {
        gaps.push(TimeRange {
            start: cursor,
            end: window.end,
        });
    }

    gaps
}
