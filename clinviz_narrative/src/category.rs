// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight categories.

use peniko::Color;
use peniko::color::palette::css;

/// The semantic color of a highlight.
///
/// Upstream panels author highlights with free-form category labels; this
/// enum is the fixed set the renderer understands, with [`Gray`](Self::Gray)
/// as the fallback for anything unrecognized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    /// General emphasis.
    Yellow,
    /// Improvement, resolution.
    Green,
    /// Abnormal or critical findings.
    Red,
    /// Medications and interventions.
    Blue,
    /// Diagnoses and history.
    Purple,
    /// Pending items, follow-ups.
    Orange,
    /// Fallback for unrecognized category labels.
    #[default]
    Gray,
}

impl HighlightCategory {
    /// Maps a free-form category label to a variant.
    ///
    /// Matching is ASCII-case-insensitive on the trimmed label; anything
    /// unrecognized falls back to [`Gray`](Self::Gray).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("yellow") {
            Self::Yellow
        } else if label.eq_ignore_ascii_case("green") {
            Self::Green
        } else if label.eq_ignore_ascii_case("red") {
            Self::Red
        } else if label.eq_ignore_ascii_case("blue") {
            Self::Blue
        } else if label.eq_ignore_ascii_case("purple") {
            Self::Purple
        } else if label.eq_ignore_ascii_case("orange") {
            Self::Orange
        } else {
            Self::Gray
        }
    }

    /// Returns the fill color a renderer should paint behind this category.
    ///
    /// Pastel CSS-palette values, so black text stays legible on top.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Yellow => css::GOLD,
            Self::Green => css::LIGHT_GREEN,
            Self::Red => css::SALMON,
            Self::Blue => css::LIGHT_SKY_BLUE,
            Self::Purple => css::PLUM,
            Self::Orange => css::ORANGE,
            Self::Gray => css::LIGHT_GRAY,
        }
    }
}
