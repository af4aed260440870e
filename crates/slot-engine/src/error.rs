//! Error types for slot-engine operations.
//!
//! Only validation failures surface here: malformed inputs fail fast to the
//! immediate caller. A busy source going away is not an error (the
//! aggregator degrades it to an empty contribution), and empty results
//! (no window, no golden hour, no slot) are plain empty values.

use chrono::{DateTime, NaiveTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time range: start {start} is not before end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),

    #[error("Invalid availability window: start {start} is not before end {end}")]
    InvalidWindow { start: NaiveTime, end: NaiveTime },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
