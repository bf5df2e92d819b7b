// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced timeline scales.
//!
//! A [`TimelineScale`] maps calendar dates to coordinates on a fixed-width
//! axis. Known events are spaced uniformly regardless of their real time
//! gaps; dates between events interpolate linearly inside the bracketing
//! gap, and dates outside the known range extrapolate through synthetic
//! anchors placed one extension period beyond the extremes. The result is a
//! monotonic mapping that keeps off-timeline data (a lab drawn before the
//! first recorded visit, say) in a directionally correct position instead of
//! pinned to the axis edge.

extern crate alloc;

use alloc::vec::Vec;

use chrono::{Datelike, Months, NaiveDate};

use crate::point::TimePoint;

/// Configuration for a timeline scale (width, padding, extension period).
///
/// Instantiate one per viewport, then [`build`](Self::build) a
/// [`TimelineScale`] whenever the event set changes. Building is a full
/// recompute; scales are never updated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineScaleSpec {
    /// Total axis width in output coordinates.
    pub width: f64,
    /// Margin reserved on each end of the axis. Must be less than half the
    /// width.
    pub padding: f64,
    /// How far beyond the earliest/latest event the synthetic extrapolation
    /// anchors are placed. Calendar-aware (a month boundary is a month
    /// boundary, leap days included).
    pub extension: Months,
}

impl TimelineScaleSpec {
    /// One calendar year, the default extension period.
    pub const DEFAULT_EXTENSION: Months = Months::new(12);

    /// Creates a spec with the default one-year extension period.
    #[must_use]
    pub fn new(width: f64, padding: f64) -> Self {
        Self {
            width,
            padding,
            extension: Self::DEFAULT_EXTENSION,
        }
    }

    /// Sets the extension period used for the synthetic anchors.
    #[must_use]
    pub fn with_extension(mut self, extension: Months) -> Self {
        self.extension = extension;
        self
    }

    /// Builds the scale for a set of events.
    ///
    /// The input may be unsorted; it is copied and stable-sorted by date, so
    /// events sharing a date keep their relative order. An empty input
    /// yields a degenerate scale (see [`TimelineScale::is_empty`]).
    ///
    /// # Panics
    ///
    /// Panics if `width` is not finite and positive, if `padding` is
    /// negative or not less than half of `width` (continuing would invert
    /// the axis), or if the extension period is zero months.
    #[must_use]
    pub fn build(&self, points: &[TimePoint]) -> TimelineScale {
        assert!(
            self.width.is_finite() && self.width > 0.0,
            "timeline width must be finite and positive"
        );
        assert!(
            self.padding.is_finite() && self.padding >= 0.0,
            "timeline padding must be finite and non-negative"
        );
        assert!(
            self.padding * 2.0 < self.width,
            "timeline padding must be less than half the width"
        );
        assert!(
            self.extension != Months::new(0),
            "timeline extension period must be positive"
        );

        if points.is_empty() {
            return TimelineScale {
                domain: Vec::new(),
                range: Vec::new(),
                width: self.width,
                padding: self.padding,
                step: 0.0,
                dates: None,
            };
        }

        let mut sorted: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
        sorted.sort();

        let n = sorted.len();
        let available = self.width - 2.0 * self.padding;
        let step = available / (n - 1).max(1) as f64;

        let earliest = sorted[0];
        let latest = sorted[n - 1];
        // Saturate at the representable-date boundary; `map` degrades to the
        // zero-width-segment rule there instead of dividing by zero.
        let pre = earliest
            .checked_sub_months(self.extension)
            .unwrap_or(NaiveDate::MIN);
        let post = latest
            .checked_add_months(self.extension)
            .unwrap_or(NaiveDate::MAX);

        let mut domain = Vec::with_capacity(n + 2);
        let mut range = Vec::with_capacity(n + 2);
        domain.push(day_number(pre));
        range.push(self.padding - step);
        for (i, date) in sorted.iter().enumerate() {
            domain.push(day_number(*date));
            range.push(self.padding + step * i as f64);
        }
        let last_x = self.padding + step * (n - 1) as f64;
        domain.push(day_number(post));
        range.push(last_x + step);

        TimelineScale {
            domain,
            range,
            width: self.width,
            padding: self.padding,
            step,
            dates: Some((earliest, latest)),
        }
    }
}

/// A built date-to-coordinate mapping for one event set.
///
/// The domain is the sorted event dates plus two synthetic anchors; the
/// range is strictly increasing, with every known event at an exactly even
/// visual step from its neighbors. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineScale {
    /// Day numbers for the anchors and sorted events, non-decreasing.
    domain: Vec<f64>,
    /// Coordinates aligned to `domain`, strictly increasing.
    range: Vec<f64>,
    width: f64,
    padding: f64,
    step: f64,
    dates: Option<(NaiveDate, NaiveDate)>,
}

impl TimelineScale {
    /// Maps a date to an axis coordinate.
    ///
    /// Dates between known events interpolate linearly inside the bracketing
    /// gap; dates beyond the synthetic anchors extrapolate with the nearest
    /// segment's slope. The result is always finite and never clamped.
    ///
    /// A date shared by several events returns the first tied rank's
    /// coordinate; use [`x`](Self::x) to place each tied event distinctly.
    /// A degenerate (empty) scale answers every query with the padding
    /// offset, which callers must treat as non-informative.
    #[must_use]
    pub fn map(&self, date: NaiveDate) -> f64 {
        let d = &self.domain;
        let r = &self.range;
        if d.is_empty() {
            return self.padding;
        }
        let t = day_number(date);
        let i = d.partition_point(|&v| v < t);
        if i < d.len() && d[i] == t {
            return r[i];
        }
        let (lo, hi) = if i == 0 {
            (0, 1)
        } else if i == d.len() {
            (d.len() - 2, d.len() - 1)
        } else {
            (i - 1, i)
        };
        let denom = d[hi] - d[lo];
        if denom == 0.0 {
            return r[lo];
        }
        r[lo] + (t - d[lo]) / denom * (r[hi] - r[lo])
    }

    /// Returns the coordinate assigned to the event at `rank` in date order
    /// (0-based, ties in input order).
    ///
    /// This is the value `map` returns for that event's date when the date
    /// is unique; for tied dates it is the only way to recover each event's
    /// distinct coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= point_count()`.
    #[must_use]
    pub fn x(&self, rank: usize) -> f64 {
        assert!(rank < self.point_count(), "rank out of range");
        self.range[rank + 1]
    }

    /// Returns the number of events the scale was built from.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.domain.len().saturating_sub(2)
    }

    /// Returns true for the degenerate scale built from no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Returns the visual step between consecutive events (zero when
    /// degenerate).
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the configured axis width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the configured padding margin.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the earliest and latest known event dates, if any.
    #[must_use]
    pub fn domain(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.dates
    }
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}
