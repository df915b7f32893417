//! Label records and the per-label renderer.
//!
//! One [`LabelRecord`] describes one physical label: a 6-character value, a
//! 2-character type suffix (the media type printed after the value, e.g.
//! `L5`) and a rendering mode. The [`LabelRenderer`] turns a record into the
//! drawing primitives for one slot of the sheet.

use serde::{Deserialize, Serialize};

use crate::draw::{Shape, TextAnchor};
use crate::error::{LabelError, Result};
use crate::symbology::{encode, UNITS_PER_CODE};
use crate::tables;

/// Required length of a label value.
pub const VALUE_LEN: usize = 6;
/// Required length of a label type suffix.
pub const TYPE_LEN: usize = 2;

/// Characters drawn per label: `*` + value + type + `*`.
const CHARS_PER_LABEL: usize = 1 + VALUE_LEN + TYPE_LEN + 1;

/// Accent colors for the digit cells of [`LabelMode::Color`], indexed by
/// digit value.
pub const DIGIT_PALETTE: [&str; 10] = [
    "#f2f2f2", "#e6194b", "#3cb44b", "#ffe119", "#4363d8",
    "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c",
];

/// Padding between the label edge and its content, in mm.
const PAD: f64 = 1.0;

/// How a label is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Bars with a human-readable caption above each character.
    Simple,
    /// Bars below a row of bordered cells, digits colored from
    /// [`DIGIT_PALETTE`].
    Color,
    /// Like [`LabelMode::Color`] but without the color fills.
    Frame,
    /// A blank bordered slot; nothing is encoded.
    Placeholder,
}

/// One physical label to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    /// 6-character payload, e.g. a tape cartridge name.
    pub value: String,
    /// 2-character type suffix, e.g. the media type.
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: LabelMode,
}

impl LabelRecord {
    /// Build a record, rejecting payloads the renderer would refuse.
    pub fn new(value: impl Into<String>, kind: impl Into<String>, mode: LabelMode) -> Result<Self> {
        let record = LabelRecord { value: value.into(), kind: kind.into(), mode };
        record.validate()?;
        Ok(record)
    }

    /// A blank slot, usable to keep already-used sheet positions empty.
    pub fn placeholder() -> Self {
        LabelRecord { value: String::new(), kind: String::new(), mode: LabelMode::Placeholder }
    }

    /// Check lengths and the character set. Placeholders carry no payload
    /// and always pass.
    pub fn validate(&self) -> Result<()> {
        if self.mode == LabelMode::Placeholder {
            return Ok(());
        }
        let value_len = self.value.chars().count();
        if value_len != VALUE_LEN {
            return Err(LabelError::BadValueLength(value_len));
        }
        let kind_len = self.kind.chars().count();
        if kind_len != TYPE_LEN {
            return Err(LabelError::BadTypeLength(kind_len));
        }
        for c in self.value.chars().chain(self.kind.chars()) {
            if c == '*' {
                return Err(LabelError::ReservedDelimiter);
            }
            if tables::lookup(c).is_none() {
                return Err(LabelError::UnsupportedChar(c));
            }
        }
        Ok(())
    }
}

/// Build a run of records from a prefix and a numeric range. Numbers are
/// zero-padded so the value is exactly [`VALUE_LEN`] characters; a number
/// that does not fit next to the prefix fails like any oversized value.
pub fn sequence(
    prefix: &str,
    start: u32,
    count: u32,
    kind: &str,
    mode: LabelMode,
) -> Result<Vec<LabelRecord>> {
    let digits = VALUE_LEN.saturating_sub(prefix.chars().count());
    (0..count)
        .map(|i| {
            let value = format!("{prefix}{:0digits$}", start + i);
            LabelRecord::new(value, kind, mode)
        })
        .collect()
}

/// Renders one label record at a slot position.
#[derive(Debug, Clone, Copy)]
pub struct LabelRenderer {
    /// Label width in mm.
    pub width: f64,
    /// Label height in mm.
    pub height: f64,
}

impl LabelRenderer {
    pub const fn new(width: f64, height: f64) -> Self {
        LabelRenderer { width, height }
    }

    /// Draw `record` with its top-left corner at `(x, y)`.
    ///
    /// `draw_border` adds an unfilled rectangle over the label's bounding
    /// box in every mode; in placeholder mode it is tagged `placeholder` so
    /// print styling can hide it.
    pub fn render(&self, record: &LabelRecord, x: f64, y: f64, draw_border: bool) -> Result<Vec<Shape>> {
        record.validate()?;
        let mut shapes = Vec::new();

        if record.mode == LabelMode::Placeholder {
            if draw_border {
                shapes.push(Shape::outlined(x, y, self.width, self.height, 0.2).with_class("placeholder"));
            }
            return Ok(shapes);
        }

        let inner_w = self.width - 2.0 * PAD;
        let inner_h = self.height - 2.0 * PAD;
        if inner_w <= 0.0 || inner_h <= 0.0 {
            return Err(LabelError::LabelTooSmall);
        }
        // ten characters plus nine one-narrow-unit gaps fill the label width
        let unit = inner_w / (UNITS_PER_CODE * CHARS_PER_LABEL as f64 + (CHARS_PER_LABEL - 1) as f64);
        let text = format!("*{}{}*", record.value, record.kind);

        match record.mode {
            LabelMode::Simple => {
                let caption_h = inner_h * 0.35;
                for (i, c) in text.chars().enumerate() {
                    if c == '*' {
                        continue; // delimiters carry no caption
                    }
                    let start = x + PAD + i as f64 * (UNITS_PER_CODE + 1.0) * unit;
                    shapes.push(Shape::Text {
                        x: start + UNITS_PER_CODE * unit / 2.0,
                        y: y + PAD + caption_h * 0.8,
                        size: caption_h * 0.9,
                        anchor: TextAnchor::Middle,
                        content: c.to_string(),
                    });
                }
                draw_bars(&mut shapes, &text, x + PAD, y + PAD + caption_h, unit, inner_h - caption_h)?;
            }
            LabelMode::Color | LabelMode::Frame => {
                let head_h = inner_h * 0.45;
                let cell_w = inner_w / (VALUE_LEN + 1) as f64;
                let cells = record.value.chars().map(Some).chain([None]);
                for (i, c) in cells.enumerate() {
                    let cell_x = x + PAD + i as f64 * cell_w;
                    let mut cell = Shape::outlined(cell_x, y + PAD, cell_w, head_h, 0.15);
                    if record.mode == LabelMode::Color {
                        if let Some(d) = c.and_then(|c| c.to_digit(10)) {
                            cell = cell.with_fill(DIGIT_PALETTE[d as usize]);
                        }
                    }
                    shapes.push(cell);

                    let size = head_h * 0.55;
                    shapes.push(Shape::Text {
                        x: cell_x + cell_w / 2.0,
                        y: y + PAD + head_h / 2.0 + size * 0.35,
                        size,
                        anchor: TextAnchor::Middle,
                        // the last cell shows the type suffix
                        content: c.map_or_else(|| record.kind.clone(), |c| c.to_string()),
                    });
                }
                draw_bars(&mut shapes, &text, x + PAD, y + PAD + head_h, unit, inner_h - head_h)?;
            }
            LabelMode::Placeholder => unreachable!("handled above"),
        }

        if draw_border {
            shapes.push(Shape::outlined(x, y, self.width, self.height, 0.2));
        }
        Ok(shapes)
    }
}

/// Draw the bars of `text` starting at `x`, returning the final cursor
/// position. Spaces only advance the cursor; characters are separated by one
/// narrow unit.
fn draw_bars(shapes: &mut Vec<Shape>, text: &str, x: f64, y: f64, unit: f64, height: f64) -> Result<f64> {
    let mut cursor = x;
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            cursor += unit;
        }
        cursor = encode(c)?.elements().fold(cursor, |cx, element| {
            let w = element.units() * unit;
            if element.is_bar() {
                shapes.push(Shape::filled(cx, y, w, height, "black"));
            }
            cx + w
        });
    }
    Ok(cursor)
}
