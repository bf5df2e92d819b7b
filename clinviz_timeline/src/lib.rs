// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encounter-timeline projection for `ClinViz`.
//!
//! Clinical events are irregularly spaced in real time: a cluster of visits in
//! one week, then nothing for two years. Plotting them on a metric time axis
//! makes the cluster unreadable, so the board spaces known events **evenly**
//! and keeps the real timestamps only as an ordering (and interpolation) key.
//!
//! This crate provides:
//! - [`TimePoint`]: a dated event anchor, owned by the caller.
//! - [`TimelineScaleSpec`]: axis configuration (width, padding, extension
//!   period), instantiated into a scale per event set.
//! - [`TimelineScale`]: the built date-to-coordinate mapping, including sound
//!   extrapolation for dates outside the known range.
//!
//! Scales are immutable once built and rebuilt from scratch whenever the
//! event set or viewport changes; there is no incremental update path.

#![no_std]

extern crate alloc;

mod point;
mod scale;

pub use point::{PointId, TimePoint};
pub use scale::{TimelineScale, TimelineScaleSpec};
