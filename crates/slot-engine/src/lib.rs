//! # slot-engine
//!
//! Scheduling and conflict-resolution engine for slotwise bookings.
//!
//! Given a user's recurring availability, their confirmed and tentative
//! commitments, and busy blocks pulled from connected calendars, the
//! engine computes concrete bookable slots, partitions overlapping
//! calendar items into render-ready conflict groups, and finds the UTC
//! windows where a roster of users across timezones is simultaneously
//! within working hours.
//!
//! The engine consumes plain data and returns plain data: request
//! handlers fetch the inputs, the engine computes, the handlers persist
//! or render. It holds no state between calls and every operation is
//! safe to invoke concurrently.
//!
//! ## Modules
//!
//! - [`interval`] -- half-open `TimeRange` primitives and gap computation
//! - [`availability`] -- recurring weekly wall-clock windows
//! - [`aggregator`] -- fan-out busy-interval aggregation over four sources
//! - [`slots`] -- bookable slot generation from templates and busy time
//! - [`conflict`] -- chain-merge grouping of overlapping calendar items
//! - [`golden`] -- cross-timezone shared working-hour ranges
//! - [`suggest`] -- greedy fixed-policy fallback slot search
//! - [`error`] -- error types

pub mod aggregator;
pub mod availability;
pub mod conflict;
pub mod error;
pub mod golden;
pub mod interval;
pub mod slots;
pub mod suggest;

pub use aggregator::{BoxError, BusyAggregator, BusyInterval, BusyKind, BusyLookup};
pub use availability::WeeklyWindow;
pub use conflict::{group_for_conflict, CalendarItem, ConflictGroup, RenderableItem};
pub use error::SlotError;
pub use golden::{find_golden_hours, UserTimezoneProfile};
pub use interval::{coalesce, free_gaps, TimeRange};
pub use slots::generate_slots;
pub use suggest::{suggest_slot, DEFAULT_LOOK_AHEAD_DAYS};
