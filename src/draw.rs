//! Vector drawing primitives and the page document.
//!
//! A [`Document`] is a page-sized canvas holding a flat list of [`Shape`]s.
//! It serializes to SVG with millimeter page dimensions and a 1:1
//! user-unit-to-mm viewBox, so physical print scaling is exact. All label
//! shapes live in a single group; an optional [`Calibration`] becomes that
//! group's `scale(..) translate(..)` transform.

use core::fmt::{self, Write};

use crate::calibration::Calibration;

/// Horizontal anchoring of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// One drawing primitive, positioned in page coordinates (mm).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// CSS color, or `None` for an unfilled rectangle.
        fill: Option<&'static str>,
        stroke: Option<&'static str>,
        stroke_width: f64,
        /// CSS class, used to tag placeholder borders.
        class: Option<&'static str>,
    },
    Text {
        x: f64,
        y: f64,
        /// Font size in mm.
        size: f64,
        anchor: TextAnchor,
        content: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    },
}

impl Shape {
    /// A filled rectangle without stroke (barcode bars, color cells).
    pub fn filled(x: f64, y: f64, width: f64, height: f64, fill: &'static str) -> Self {
        Shape::Rect { x, y, width, height, fill: Some(fill), stroke: None, stroke_width: 0.0, class: None }
    }

    /// An unfilled, stroked rectangle (borders, frames).
    pub fn outlined(x: f64, y: f64, width: f64, height: f64, stroke_width: f64) -> Self {
        Shape::Rect { x, y, width, height, fill: None, stroke: Some("black"), stroke_width, class: None }
    }

    pub fn with_class(mut self, name: &'static str) -> Self {
        if let Shape::Rect { class, .. } = &mut self {
            *class = Some(name);
        }
        self
    }

    pub fn with_fill(mut self, color: &'static str) -> Self {
        if let Shape::Rect { fill, .. } = &mut self {
            *fill = Some(color);
        }
        self
    }
}

/// A full-page vector drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Page width in mm.
    pub width: f64,
    /// Page height in mm.
    pub height: f64,
    calibration: Option<Calibration>,
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new(width: f64, height: f64, calibration: Option<Calibration>) -> Self {
        Document { width, height, calibration, shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Serialize to a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (Mm(self.width), Mm(self.height));
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#
        )?;
        // placeholder borders are visible on screen but skipped on paper
        writeln!(f, "<style>@media print {{ .placeholder {{ display: none; }} }}</style>")?;
        match self.calibration {
            // scale first: the translate happens in the scaled coordinate
            // space, which is what the calibration math assumes
            Some(c) if !c.is_identity() => writeln!(
                f,
                r#"<g transform="scale({} {}) translate({} {})">"#,
                Mm(c.scale_x),
                Mm(c.scale_y),
                Mm(c.offset_x),
                Mm(c.offset_y)
            )?,
            _ => writeln!(f, "<g>")?,
        }
        for shape in &self.shapes {
            write_shape(f, shape)?;
        }
        writeln!(f, "</g>")?;
        write!(f, "</svg>")
    }
}

fn write_shape(f: &mut fmt::Formatter<'_>, shape: &Shape) -> fmt::Result {
    match shape {
        Shape::Rect { x, y, width, height, fill, stroke, stroke_width, class } => {
            write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                Mm(*x),
                Mm(*y),
                Mm(*width),
                Mm(*height),
                fill.unwrap_or("none")
            )?;
            if let Some(stroke) = stroke {
                write!(f, r#" stroke="{}" stroke-width="{}""#, stroke, Mm(*stroke_width))?;
            }
            if let Some(class) = class {
                write!(f, r#" class="{}""#, class)?;
            }
            writeln!(f, "/>")
        }
        Shape::Text { x, y, size, anchor, content } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
            };
            write!(
                f,
                r#"<text x="{}" y="{}" font-family="monospace" font-size="{}" text-anchor="{}">"#,
                Mm(*x),
                Mm(*y),
                Mm(*size),
                anchor
            )?;
            for c in content.chars() {
                match c {
                    '&' => f.write_str("&amp;")?,
                    '<' => f.write_str("&lt;")?,
                    '>' => f.write_str("&gt;")?,
                    c => f.write_char(c)?,
                }
            }
            writeln!(f, "</text>")
        }
        Shape::Line { x1, y1, x2, y2, width } => writeln!(
            f,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}"/>"#,
            Mm(*x1),
            Mm(*y1),
            Mm(*x2),
            Mm(*y2),
            Mm(*width)
        ),
    }
}

/// Millimeter value formatter: four decimals, trailing zeros trimmed, so the
/// output is compact and byte-stable across runs.
struct Mm(f64);

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.4}", self.0);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        f.write_str(if s == "-0" { "0" } else { s })
    }
}
