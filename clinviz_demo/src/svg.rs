// Copyright 2026 the ClinViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `clinviz_demo`.

use kurbo::{Point, Rect};
use peniko::Color;

/// Horizontal text anchoring for [`SvgScene::push_text`].
#[derive(Clone, Copy, Debug)]
pub(crate) enum Anchor {
    Start,
    Middle,
}

/// An append-only SVG document with a fixed view box.
#[derive(Debug)]
pub(crate) struct SvgScene {
    view: Rect,
    body: String,
}

impl SvgScene {
    pub(crate) fn new(view: Rect) -> Self {
        Self {
            view,
            body: String::new(),
        }
    }

    pub(crate) fn push_rect(&mut self, rect: Rect, fill: Color) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn push_line(&mut self, p0: Point, p1: Point, stroke: Color, stroke_width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            p0.x, p0.y, p1.x, p1.y,
        ));
        write_color_attr(&mut self.body, "stroke", stroke);
        self.body
            .push_str(&format!(r#" stroke-width="{stroke_width}""#));
        self.body.push_str("/>\n");
    }

    pub(crate) fn push_circle(&mut self, center: Point, radius: f64, fill: Color) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{radius}""#,
            center.x, center.y,
        ));
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn push_text(
        &mut self,
        pos: Point,
        text: &str,
        font_size: f64,
        fill: Color,
        anchor: Anchor,
    ) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{font_size}" font-family="sans-serif""#,
            pos.x, pos.y,
        ));
        self.body.push_str(match anchor {
            Anchor::Start => r#" text-anchor="start""#,
            Anchor::Middle => r#" text-anchor="middle""#,
        });
        write_color_attr(&mut self.body, "fill", fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            self.view.x0,
            self.view.y0,
            self.view.width(),
            self.view.height(),
            self.view.width(),
            self.view.height(),
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(
        r##" {name}="#{:02x}{:02x}{:02x}""##,
        rgba.r, rgba.g, rgba.b
    ));
    if rgba.a != 255 {
        out.push_str(&format!(
            r#" {name}-opacity="{}""#,
            f64::from(rgba.a) / 255.0
        ));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
