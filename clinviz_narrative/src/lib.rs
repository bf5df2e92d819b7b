// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clinical-note normalization and highlight annotation for `ClinViz`.
//!
//! Note bodies arrive as free text with a small markup subset (headers,
//! emphasis, rules, bullets). Renderers want neither the markup nor raw
//! string offsets; they want a clean section-structured string and an
//! ordered run of plain/highlighted spans they can style by category.
//!
//! Two pure transforms provide that:
//! - [`normalize`] strips the markup subset while preserving section
//!   boundaries as blank lines. It is idempotent.
//! - [`annotate`] matches literal highlight fragments against the
//!   normalized text and emits a [`NoteSpan`] sequence that, concatenated,
//!   reconstructs the normalized text exactly.
//!
//! Both are synchronous, allocation-local, and safe to call concurrently
//! from independent panels; there is no caching layer here.

#![no_std]

extern crate alloc;

mod annotate;
mod category;
mod normalize;

pub use annotate::{HighlightRequest, NoteSpan, annotate};
pub use category::HighlightCategory;
pub use normalize::normalize;
