//! Page geometry: paper sizes, sheet layout and the label slot grid.

use core::iter;

use serde::{Deserialize, Serialize};

/// Supported paper presets. Dimensions in millimeters, portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    pub const fn width(&self) -> f64 {
        match self {
            PaperSize::A4 => 210.0,
            PaperSize::Letter => 215.9,
        }
    }

    pub const fn height(&self) -> f64 {
        match self {
            PaperSize::A4 => 297.0,
            PaperSize::Letter => 279.4,
        }
    }
}

/// Geometry of one label sheet. All lengths in millimeters.
///
/// A label fits on the page only if it lies entirely within the page bounds
/// given the margins; an oversized label yields zero slots, which is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub label_width: f64,
    pub label_height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    pub column_spacing: f64,
    pub row_spacing: f64,
    /// Draw an unfilled rectangle around every label.
    pub border: bool,
}

impl PageLayout {
    /// Layout for the reference 70×16.9mm sheet (3×17 labels on A4).
    pub fn new(paper: PaperSize) -> Self {
        PageLayout {
            page_width: paper.width(),
            page_height: paper.height(),
            label_width: 70.0,
            label_height: 16.9,
            margin_left: 0.0,
            margin_top: 5.0,
            column_spacing: 0.0,
            row_spacing: 0.0,
            border: true,
        }
    }

    fn columns(&self) -> usize {
        fit(self.page_width, self.margin_left, self.label_width, self.column_spacing)
    }

    fn rows(&self) -> usize {
        fit(self.page_height, self.margin_top, self.label_height, self.row_spacing)
    }

    /// Number of labels that fit on one sheet.
    pub fn max_labels(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Iterate over the label slots of the sheet in row-major order
    /// (top-to-bottom, left-to-right within a row), indices starting at 0.
    pub fn slots(&self) -> Slots {
        Slots {
            columns: self.columns(),
            rows: self.rows(),
            index: 0,
            origin: (self.margin_left, self.margin_top),
            step: (
                self.label_width + self.column_spacing,
                self.label_height + self.row_spacing,
            ),
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout::new(PaperSize::A4)
    }
}

/// Count how many labels of `size` fit along one axis of length `span`,
/// after `margin` and with `spacing` between consecutive labels: the largest
/// n with `margin + (n-1)*(size+spacing) + size <= span`.
fn fit(span: f64, margin: f64, size: f64, spacing: f64) -> usize {
    if size <= 0.0 || size + spacing <= 0.0 {
        return 0;
    }
    let free = span - margin - size;
    if free < 0.0 {
        return 0;
    }
    (free / (size + spacing)).floor() as usize + 1
}

/// One grid position on the sheet where a label may be printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub column: usize,
    pub row: usize,
    /// Sequential position, row-major, starting at 0.
    pub index: usize,
    /// Left edge of the slot on the page, in mm.
    pub x: f64,
    /// Top edge of the slot on the page, in mm.
    pub y: f64,
}

/// Iterator over the label slots of a [`PageLayout`].
#[derive(Debug, Clone)]
pub struct Slots {
    columns: usize,
    rows: usize,
    index: usize,
    origin: (f64, f64),
    step: (f64, f64),
}

impl iter::Iterator for Slots {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.columns == 0 || self.index >= self.columns * self.rows {
            return None;
        }
        let (column, row) = (self.index % self.columns, self.index / self.columns);
        let slot = Slot {
            column,
            row,
            index: self.index,
            x: self.origin.0 + column as f64 * self.step.0,
            y: self.origin.1 + row as f64 * self.step.1,
        };
        self.index += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.columns * self.rows).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl iter::ExactSizeIterator for Slots {}
impl iter::FusedIterator for Slots {}
