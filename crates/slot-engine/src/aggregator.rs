//! Multi-source busy interval aggregation.
//!
//! Fans out to the four busy-time sources (owned events, participations,
//! pending meeting requests, external-calendar blocks), tags each
//! contribution with its origin, and concatenates the results. A failing
//! source degrades to an empty contribution and is logged; it never fails
//! the aggregate.
//!
//! The combined list is unsorted and not de-duplicated. Callers needing
//! chronological order sort explicitly; an interval visible through two
//! sources is kept twice.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interval::TimeRange;

/// Boxed error for busy-source implementations. Sources are external
/// collaborators (database queries, provider APIs); their failures are
/// opaque to the engine and never propagate past [`BusyAggregator`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Origin of a busy interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyKind {
    OwnedEvent,
    Participation,
    PendingRequest,
    ExternalEvent,
}

impl fmt::Display for BusyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BusyKind::OwnedEvent => "owned_event",
            BusyKind::Participation => "participation",
            BusyKind::PendingRequest => "pending_request",
            BusyKind::ExternalEvent => "external_event",
        })
    }
}

/// A time range during which the user is unavailable for new bookings,
/// regardless of why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: BusyKind,
}

impl BusyInterval {
    pub fn range(&self) -> TimeRange {
        TimeRange {
            start: self.start,
            end: self.end,
        }
    }
}

/// A single busy-time source, restricted to one user and a query range.
///
/// Implementations with nothing connected (e.g. no external calendar
/// integration for this user) must return `Ok(vec![])`, not an error.
#[async_trait]
pub trait BusyLookup: Send + Sync {
    async fn busy_ranges(
        &self,
        user_id: &str,
        range: TimeRange,
    ) -> std::result::Result<Vec<TimeRange>, BoxError>;
}

/// Aggregates the four busy-time sources for a user.
pub struct BusyAggregator<'a> {
    owned: &'a dyn BusyLookup,
    participation: &'a dyn BusyLookup,
    pending: &'a dyn BusyLookup,
    external: &'a dyn BusyLookup,
}

impl<'a> BusyAggregator<'a> {
    pub fn new(
        owned: &'a dyn BusyLookup,
        participation: &'a dyn BusyLookup,
        pending: &'a dyn BusyLookup,
        external: &'a dyn BusyLookup,
    ) -> Self {
        Self {
            owned,
            participation,
            pending,
            external,
        }
    }

    /// Fetch and combine busy intervals from all four sources.
    ///
    /// The fetches run concurrently and are joined before returning. A
    /// slow source delays only the join; a failing source contributes an
    /// empty list and the failure is logged for observability.
    pub async fn aggregate(&self, user_id: &str, range: TimeRange) -> Vec<BusyInterval> {
        let (owned, participation, pending, external) = tokio::join!(
            fetch_tagged(self.owned, BusyKind::OwnedEvent, user_id, range),
            fetch_tagged(self.participation, BusyKind::Participation, user_id, range),
            fetch_tagged(self.pending, BusyKind::PendingRequest, user_id, range),
            fetch_tagged(self.external, BusyKind::ExternalEvent, user_id, range),
        );

        let mut combined = owned;
        combined.extend(participation);
        combined.extend(pending);
        combined.extend(external);
        combined
    }
}

/// Fetch one source, converting failure into an empty contribution.
async fn fetch_tagged(
    source: &dyn BusyLookup,
    kind: BusyKind,
    user_id: &str,
    range: TimeRange,
) -> Vec<BusyInterval> {
    match source.busy_ranges(user_id, range).await {
        Ok(ranges) => ranges
            .into_iter()
            .map(|r| BusyInterval {
                start: r.start,
                end: r.end,
                kind,
            })
            .collect(),
        Err(error) => {
            warn!(source = %kind, user_id, error = %error, "busy source failed, contributing no intervals");
            Vec::new()
        }
    }
}
