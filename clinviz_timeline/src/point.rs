// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event anchor types.

use chrono::NaiveDate;

/// A stable, opaque identity for a timeline event.
///
/// The scale never interprets this value; it exists so callers can correlate
/// projected coordinates back to their own records (marks, note panels, …).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

impl PointId {
    /// Creates an id from a raw value (e.g. a sequence number).
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// A single dated clinical event used as an anchor for the timeline scale.
///
/// Dates are calendar dates, time-zone-naive. Multiple points may share a
/// date; they still receive distinct coordinates (see
/// [`TimelineScale::x`](crate::TimelineScale::x)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimePoint {
    /// Caller-side identity for this event.
    pub id: PointId,
    /// The event's calendar date.
    pub date: NaiveDate,
}

impl TimePoint {
    /// Creates a new event anchor.
    #[must_use]
    pub fn new(id: PointId, date: NaiveDate) -> Self {
        Self { id, date }
    }
}
