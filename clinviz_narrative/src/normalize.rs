// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup normalization for note bodies.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Strips the note markup subset and re-flows the text into sections.
///
/// Per line: `#`–`######` headers (marker plus whitespace plus text) keep
/// their text and force a section break before it; lines of three or more
/// hyphens are dropped and force a break; leading `* ` bullet markers are
/// stripped; paired `**…**` and `*…*` emphasis markers are removed keeping
/// the inner text; lines are trimmed and blank lines dropped. Blank lines
/// also separate sections, so consecutive non-blank lines re-flow into one
/// space-joined section and sections are emitted separated by a blank line.
///
/// The transform is idempotent: its output contains no remaining markup, so
/// a second pass only re-splits on the blank lines it emitted itself.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut sections: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut pending_break = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_rule(trimmed) {
            pending_break = true;
            continue;
        }

        let (content, is_header) = split_header(trimmed);
        if is_header {
            pending_break = true;
        }
        let content = strip_bullet(content);
        let content = strip_pairs(&strip_pairs(content, "**"), "*");
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        if pending_break && !current.is_empty() {
            sections.push(core::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(content);
        pending_break = false;
    }

    if !current.is_empty() {
        sections.push(current);
    }
    sections.join("\n\n")
}

/// A horizontal rule: nothing but hyphens, at least three of them.
fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// Splits a header marker off a trimmed line.
///
/// Returns the header text and `true` for `1..=6` leading `#` characters
/// followed by whitespace and text; otherwise the line is returned verbatim.
fn split_header(line: &str) -> (&str, bool) {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return (line, false);
    }
    let rest = &line[hashes..];
    let text = rest.trim_start();
    if text.is_empty() || text.len() == rest.len() {
        // No whitespace after the markers, or no text after the whitespace.
        return (line, false);
    }
    (text, true)
}

/// Strips a leading `* ` list marker.
fn strip_bullet(line: &str) -> &str {
    match line.strip_prefix("* ") {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Removes paired occurrences of `marker`, keeping the text between them.
///
/// An unpaired trailing marker is kept as literal text.
fn strip_pairs(s: &str, marker: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(i) = rest.find(marker) {
        let after = &rest[i + marker.len()..];
        let Some(j) = after.find(marker) else {
            break;
        };
        out.push_str(&rest[..i]);
        out.push_str(&after[..j]);
        rest = &after[j + marker.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn headers_and_rules_force_section_breaks() {
        let raw = "# HPI\n\nPatient doing well.\n\n## Plan\n* Continue **metformin** daily\n---\nFollow up in *3 months*";
        assert_eq!(
            normalize(raw),
            "HPI\n\nPatient doing well.\n\nPlan Continue metformin daily\n\nFollow up in 3 months"
        );
    }

    #[test]
    fn header_break_applies_before_the_header_only() {
        // No blank line after the header, so its text re-flows with the
        // following line.
        assert_eq!(normalize("# Assessment\nstable"), "Assessment stable");
    }

    #[test]
    fn emphasis_markers_are_removed_in_place() {
        assert_eq!(
            normalize("**Chief complaint:** *intermittent* fever"),
            "Chief complaint: intermittent fever"
        );
    }

    #[test]
    fn unpaired_emphasis_is_literal_text() {
        assert_eq!(normalize("dose 2*3 units"), "dose 2*3 units");
    }

    #[test]
    fn bullet_markers_keep_inner_emphasis_pairing() {
        assert_eq!(normalize("* improving *slowly*"), "improving slowly");
    }

    #[test]
    fn rules_need_at_least_three_hyphens() {
        assert_eq!(normalize("before\n----\nafter"), "before\n\nafter");
        assert_eq!(normalize("a\n--\nb"), "a -- b");
    }

    #[test]
    fn hash_without_whitespace_is_not_a_header() {
        assert_eq!(normalize("#tag stays"), "#tag stays");
        assert_eq!(normalize("####### seven"), "####### seven");
    }

    #[test]
    fn consecutive_lines_join_with_a_single_space() {
        assert_eq!(normalize("one\ntwo\nthree"), "one two three");
    }

    #[test]
    fn blank_lines_separate_sections_and_collapse() {
        assert_eq!(normalize("  a  \n\n\n  b  "), "a\n\nb");
    }

    #[test]
    fn empty_and_whitespace_only_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t\n  "), "");
        assert_eq!(normalize("---\n\n-----"), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        let raw = "# Discharge summary\n\n## Course\nAdmitted with **sepsis**; *blood cultures* drawn.\n* IV antibiotics started\n* Defervesced by day 3\n----\n### Medications\n* **Ceftriaxone** 1g daily\n\nFollow up with PCP in *one week*.";
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }
}
