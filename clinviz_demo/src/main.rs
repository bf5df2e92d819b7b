// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo consumer for the `ClinViz` transform crates.
//!
//! Builds a synthetic encounter history and a markup-bearing progress note,
//! runs both transforms, and renders the results into a single SVG: an
//! evenly spaced encounter timeline strip on top, the highlighted note
//! below. The renderer here is a pure function from the transforms' output
//! to drawable shapes; no state flows back into the library crates.

mod svg;

use chrono::{Months, NaiveDate};
use clinviz_narrative::{HighlightCategory, HighlightRequest, NoteSpan, annotate};
use clinviz_timeline::{PointId, TimePoint, TimelineScaleSpec};
use kurbo::{Point, Rect};
use peniko::color::palette::css;

use svg::{Anchor, SvgScene};

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 340.0;
const MARGIN: f64 = 48.0;
const FONT: f64 = 12.0;
// Same ~0.6em average glyph width heuristic the measurement fallback uses.
const GLYPH_W: f64 = 0.6 * FONT;

fn main() {
    let mut scene = SvgScene::new(Rect::new(0.0, 0.0, WIDTH, HEIGHT));
    scene.push_rect(Rect::new(0.0, 0.0, WIDTH, HEIGHT), css::WHITE);

    timeline_strip(&mut scene);
    note_panel(&mut scene);

    let out = scene.to_svg_string();
    std::fs::write("clinviz_demo.svg", out).expect("write clinviz_demo.svg");
    println!("wrote clinviz_demo.svg");
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn timeline_strip(scene: &mut SvgScene) {
    // Irregular real-world spacing: two visits a week apart, then a
    // two-year gap. The scale spaces them evenly anyway.
    let encounters = [
        TimePoint::new(PointId(0), date(2019, 11, 2)),
        TimePoint::new(PointId(1), date(2021, 3, 14)),
        TimePoint::new(PointId(2), date(2021, 3, 21)),
        TimePoint::new(PointId(3), date(2023, 6, 15)),
    ];
    let scale = TimelineScaleSpec::new(WIDTH, MARGIN).build(&encounters);

    let y = 86.0;
    scene.push_text(
        Point::new(WIDTH / 2.0, 32.0),
        "Encounter timeline",
        14.0,
        css::BLACK,
        Anchor::Middle,
    );
    scene.push_line(
        Point::new(MARGIN, y),
        Point::new(WIDTH - MARGIN, y),
        css::BLACK,
        1.0,
    );

    let mut dates: Vec<NaiveDate> = encounters.iter().map(|p| p.date).collect();
    dates.sort();
    for (rank, d) in dates.iter().enumerate() {
        let x = scale.x(rank);
        scene.push_circle(Point::new(x, y), 5.0, css::STEEL_BLUE);
        scene.push_text(
            Point::new(x, y + 24.0),
            &d.to_string(),
            10.0,
            css::DIM_GRAY,
            Anchor::Middle,
        );
    }

    // A lab drawn a month before the first recorded visit: off the known
    // range, placed by extrapolation instead of pinned to the edge.
    let early = dates[0]
        .checked_sub_months(Months::new(1))
        .expect("demo date in range");
    let x = scale.map(early);
    scene.push_circle(Point::new(x, y), 4.0, css::SALMON);
    scene.push_text(
        Point::new(x, y - 14.0),
        "early lab",
        10.0,
        css::DIM_GRAY,
        Anchor::Middle,
    );
}

fn note_panel(scene: &mut SvgScene) {
    let note = "# Progress note\n\nPatient seen for follow-up of **type 2 diabetes**.\n* Reports *improved* morning glucose\n* Denies chest pain\n---\nContinue **metformin**; recheck *HbA1c* in 3 months.";
    let highlights = [
        HighlightRequest::new("type 2 diabetes", HighlightCategory::Purple),
        HighlightRequest::new("improved", HighlightCategory::Green),
        HighlightRequest::new("chest pain", HighlightCategory::Red),
        HighlightRequest::new("**metformin**", HighlightCategory::Blue),
        HighlightRequest::new("HbA1c", HighlightCategory::Orange),
    ];
    let spans = annotate(note, &highlights);

    scene.push_text(
        Point::new(WIDTH / 2.0, 170.0),
        "Annotated note",
        14.0,
        css::BLACK,
        Anchor::Middle,
    );

    let line_height = 1.6 * FONT;
    let mut x = MARGIN;
    let mut y = 200.0;
    for span in &spans {
        for (i, segment) in span.text().split('\n').enumerate() {
            if i > 0 {
                x = MARGIN;
                y += line_height;
            }
            if segment.is_empty() {
                continue;
            }
            let w = GLYPH_W * segment.chars().count() as f64;
            if let Some(category) = span.category() {
                scene.push_rect(
                    Rect::new(x - 1.0, y - FONT, x + w + 1.0, y + 0.4 * FONT),
                    category.color(),
                );
            }
            scene.push_text(Point::new(x, y), segment, FONT, css::BLACK, Anchor::Start);
            x += w;
        }
    }

    let reconstructed: String = spans.iter().map(NoteSpan::text).collect();
    debug_assert_eq!(reconstructed, clinviz_narrative::normalize(note));
}
