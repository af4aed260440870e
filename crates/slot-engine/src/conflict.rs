//! Conflict grouping for calendar rendering.
//!
//! Partitions a flat list of calendar items into singles and conflict
//! chains so overlapping items can be laid out as one visual cluster.
//! Overlap is transitive through a chain: if A overlaps B and B overlaps
//! C, all three land in one group even when A and C never touch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A calendar item as supplied by the caller.
///
/// The engine reads only `id`, `start` and `end`; every other field the
/// caller serialized into the item is carried through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarItem {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A maximal chain of overlapping calendar items. Always has at least two
/// members; a lone item is emitted unwrapped as [`RenderableItem::Single`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictGroup {
    /// Derived from the lexicographically sorted member ids, so the same
    /// set of items produces the same id whatever order they arrived in.
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Members ordered by start time.
    pub members: Vec<CalendarItem>,
}

/// One renderable entry: a lone item, or a chain of overlapping ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderableItem {
    Single(CalendarItem),
    Group(ConflictGroup),
}

impl RenderableItem {
    pub fn start(&self) -> DateTime<Utc> {
        match self {
            RenderableItem::Single(item) => item.start,
            RenderableItem::Group(group) => group.start,
        }
    }

    pub fn end(&self) -> DateTime<Utc> {
        match self {
            RenderableItem::Single(item) => item.end,
            RenderableItem::Group(group) => group.end,
        }
    }
}

/// Partition `items` into singles and conflict groups, ordered by start.
///
/// The sort is stable: items sharing a start time keep their original
/// relative order. An item joins the open group only when its start is
/// strictly before the group's running maximum end; items that merely
/// touch stay separate. Every input item appears in exactly one output
/// entry.
pub fn group_for_conflict(items: &[CalendarItem]) -> Vec<RenderableItem> {
    let mut sorted: Vec<CalendarItem> = items.to_vec();
    sorted.sort_by_key(|item| item.start);

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut running_max_end = first.end;
    let mut current = vec![first];

    for item in iter {
        if item.start < running_max_end {
            running_max_end = running_max_end.max(item.end);
            current.push(item);
        } else {
            out.push(flush(current));
            running_max_end = item.end;
            current = vec![item];
        }
    }
    out.push(flush(current));

    out
}

/// Emit a completed chain: unwrapped when it has a single member, as a
/// [`ConflictGroup`] otherwise. `members` is non-empty and sorted by start.
fn flush(mut members: Vec<CalendarItem>) -> RenderableItem {
    if members.len() == 1 {
        let only = members.remove(0);
        return RenderableItem::Single(only);
    }

    let start = members[0].start;
    let end = members.iter().fold(start, |acc, m| acc.max(m.end));

    let mut ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    let id = format!("conflict-{}", ids.join("+"));

    RenderableItem::Group(ConflictGroup {
        id,
        start,
        end,
        members,
    })
}
