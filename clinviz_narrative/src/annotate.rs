// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight annotation over normalized note text.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::category::HighlightCategory;
use crate::normalize::normalize;

/// A literal fragment to highlight, with its semantic category.
///
/// Caller-owned, read-only input. The fragment may carry the same markup
/// subset as the note body; both are normalized before matching, so a
/// fragment authored as `**BP elevated**` still matches the cleaned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRequest {
    /// The literal text to find in the normalized note body.
    pub text: String,
    /// Category used to style the resulting spans.
    pub category: HighlightCategory,
}

impl HighlightRequest {
    /// Creates a new highlight request.
    #[must_use]
    pub fn new(text: impl Into<String>, category: HighlightCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// A contiguous run of output text, plain or highlighted.
///
/// Spans are produced left to right and, concatenated, reconstruct the
/// normalized input exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteSpan {
    /// Unhighlighted text between matches.
    Plain(String),
    /// A matched highlight fragment.
    Highlighted {
        /// The matched text (equal to the fragment's normalized form).
        text: String,
        /// The requesting highlight's category.
        category: HighlightCategory,
    },
}

impl NoteSpan {
    /// Returns the span's text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Highlighted { text, .. } => text,
        }
    }

    /// Returns the span's category, if highlighted.
    #[must_use]
    pub fn category(&self) -> Option<HighlightCategory> {
        match self {
            Self::Plain(_) => None,
            Self::Highlighted { category, .. } => Some(*category),
        }
    }
}

/// Annotates a note body with highlight spans.
///
/// The body and every fragment are normalized first (see
/// [`normalize`]); fragments that normalize to empty are dropped. The
/// remaining fragments are ordered longest-first (stable, so equal-length
/// requests keep their submitted order) and matched by a single
/// left-to-right scan: at each position the first fragment that matches
/// wins and the cursor jumps past it, so when one fragment contains
/// another, the longer, more specific span always wins. Unmatched runs
/// coalesce into single plain spans; highlighted spans are never merged,
/// even when the same category repeats back to back.
///
/// A fragment that occurs nowhere in the text is silently ignored. Two
/// fragments that partially overlap without containment resolve by the
/// same first-match rule; the one passed over produces no span at that
/// occurrence.
#[must_use]
pub fn annotate(raw: &str, highlights: &[HighlightRequest]) -> Vec<NoteSpan> {
    let text = normalize(raw);

    let mut fragments: Vec<(String, HighlightCategory)> = highlights
        .iter()
        .map(|h| (normalize(&h.text), h.category))
        .filter(|(fragment, _)| !fragment.is_empty())
        .collect();
    fragments.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut spans = Vec::new();
    let mut plain_start = 0_usize;
    let mut cursor = 0_usize;
    while cursor < text.len() {
        let tail = &text[cursor..];
        if let Some((fragment, category)) = fragments
            .iter()
            .find(|(fragment, _)| tail.starts_with(fragment.as_str()))
        {
            if plain_start < cursor {
                spans.push(NoteSpan::Plain(text[plain_start..cursor].into()));
            }
            spans.push(NoteSpan::Highlighted {
                text: fragment.clone(),
                category: *category,
            });
            cursor += fragment.len();
            plain_start = cursor;
        } else {
            let Some(c) = tail.chars().next() else {
                break;
            };
            cursor += c.len_utf8();
        }
    }
    if plain_start < text.len() {
        spans.push(NoteSpan::Plain(text[plain_start..].into()));
    }
    spans
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    fn req(text: &str, category: HighlightCategory) -> HighlightRequest {
        HighlightRequest::new(text, category)
    }

    fn joined(spans: &[NoteSpan]) -> String {
        spans.iter().map(NoteSpan::text).collect()
    }

    #[test]
    fn longest_match_takes_precedence() {
        let spans = annotate(
            "fever and chills",
            &[
                req("fever", HighlightCategory::Yellow),
                req("fever and chills", HighlightCategory::Green),
            ],
        );
        assert_eq!(
            spans,
            [NoteSpan::Highlighted {
                text: "fever and chills".to_string(),
                category: HighlightCategory::Green,
            }]
        );
    }

    #[test]
    fn spans_reconstruct_the_normalized_text() {
        let raw = "# Exam\n* **Lungs**: clear\n* Mild *pedal edema* noted\n---\nContinue diuretics.";
        let highlights = [
            req("pedal edema", HighlightCategory::Red),
            req("diuretics", HighlightCategory::Blue),
            req("clear", HighlightCategory::Green),
        ];
        let spans = annotate(raw, &highlights);
        assert_eq!(joined(&spans), normalize(raw));
        assert_eq!(spans.iter().filter(|s| s.category().is_some()).count(), 3);
    }

    #[test]
    fn unmatched_highlight_is_silently_ignored() {
        let spans = annotate("normal findings", &[req("abnormal", HighlightCategory::Red)]);
        assert_eq!(spans, [NoteSpan::Plain("normal findings".to_string())]);
    }

    #[test]
    fn no_highlights_yields_one_plain_span() {
        let spans = annotate("some note text", &[]);
        assert_eq!(spans, [NoteSpan::Plain("some note text".to_string())]);
    }

    #[test]
    fn empty_text_yields_no_spans() {
        assert!(annotate("", &[req("fever", HighlightCategory::Yellow)]).is_empty());
        assert!(annotate("---", &[]).is_empty());
    }

    #[test]
    fn plain_runs_coalesce_between_matches() {
        let spans = annotate(
            "a fever b fever c",
            &[req("fever", HighlightCategory::Yellow)],
        );
        assert_eq!(
            spans,
            [
                NoteSpan::Plain("a ".to_string()),
                NoteSpan::Highlighted {
                    text: "fever".to_string(),
                    category: HighlightCategory::Yellow,
                },
                NoteSpan::Plain(" b ".to_string()),
                NoteSpan::Highlighted {
                    text: "fever".to_string(),
                    category: HighlightCategory::Yellow,
                },
                NoteSpan::Plain(" c".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_highlights_are_not_merged() {
        let spans = annotate(
            "feverchills",
            &[
                req("fever", HighlightCategory::Yellow),
                req("chills", HighlightCategory::Yellow),
            ],
        );
        assert_eq!(spans.len(), 2, "same-category neighbors must stay separate");
        assert!(spans.iter().all(|s| s.category().is_some()));
    }

    #[test]
    fn fragments_match_after_both_sides_normalize() {
        let spans = annotate(
            "**BP elevated** at rest",
            &[req("*BP elevated*", HighlightCategory::Red)],
        );
        assert_eq!(
            spans,
            [
                NoteSpan::Highlighted {
                    text: "BP elevated".to_string(),
                    category: HighlightCategory::Red,
                },
                NoteSpan::Plain(" at rest".to_string()),
            ]
        );
    }

    #[test]
    fn partial_overlap_resolves_by_first_match_at_cursor() {
        // "two three" is longer and sorts first, but "one two" is the first
        // fragment that matches at the cursor, so it wins the occurrence.
        let spans = annotate(
            "one two three",
            &[
                req("one two", HighlightCategory::Yellow),
                req("two three", HighlightCategory::Green),
            ],
        );
        assert_eq!(
            spans,
            [
                NoteSpan::Highlighted {
                    text: "one two".to_string(),
                    category: HighlightCategory::Yellow,
                },
                NoteSpan::Plain(" three".to_string()),
            ]
        );
    }

    #[test]
    fn equal_length_fragments_keep_request_order() {
        let spans = annotate(
            "ab",
            &[
                req("ab", HighlightCategory::Yellow),
                req("ab", HighlightCategory::Green),
            ],
        );
        assert_eq!(
            spans,
            [NoteSpan::Highlighted {
                text: "ab".to_string(),
                category: HighlightCategory::Yellow,
            }]
        );
    }

    #[test]
    fn fragment_normalizing_to_empty_is_dropped() {
        let spans = annotate("abc", &[req("**", HighlightCategory::Yellow)]);
        assert_eq!(spans, [NoteSpan::Plain("abc".to_string())]);
    }

    #[test]
    fn multibyte_text_scans_on_char_boundaries() {
        let spans = annotate(
            "température 39°C très élevée",
            &[req("39°C", HighlightCategory::Red)],
        );
        assert_eq!(joined(&spans), normalize("température 39°C très élevée"));
        assert_eq!(
            spans.iter().filter_map(NoteSpan::category).count(),
            1,
            "expected one highlighted span"
        );
    }
}
