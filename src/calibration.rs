//! Printer calibration: the scale/translate correction and the reference
//! page used to measure it.
//!
//! Printers routinely scale or shift their output by a few percent. The
//! [`calibration_page`] draws a 100mm reference square at a 50mm offset plus
//! labeled 50mm/100mm guides; the user prints it, measures where the square
//! actually landed and how big it actually is, and feeds the four numbers to
//! [`Calibration::from_measured`]. The resulting transform is applied to the
//! whole of the next page so its printed geometry matches the nominal one.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draw::{Document, Shape, TextAnchor};
use crate::layout::PaperSize;

/// Nominal offset of the reference square, in mm.
const REF_OFFSET: f64 = 50.0;
/// Nominal edge length of the reference square, in mm.
const REF_SIZE: f64 = 100.0;

/// A uniform page correction: scale both axes, then translate in the scaled
/// coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration { scale_x: 1.0, scale_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl Calibration {
    pub fn is_identity(&self) -> bool {
        *self == Calibration::default()
    }

    /// Derive the correction from a measured print of the calibration page.
    ///
    /// `start_x`/`start_y` are the measured offsets of the printed square's
    /// top-left corner, `len_x`/`len_y` its measured edge lengths, all in mm
    /// (nominally 50 and 100). Returns `None` when any measurement is
    /// missing or nonpositive; the caller then keeps the identity transform.
    pub fn from_measured(
        start_x: Option<f64>,
        start_y: Option<f64>,
        len_x: Option<f64>,
        len_y: Option<f64>,
    ) -> Option<Self> {
        let (sx, sy, dx, dy) = (start_x?, start_y?, len_x?, len_y?);
        if dx <= 0.0 || dy <= 0.0 {
            return None;
        }
        let calibration = Calibration {
            scale_x: REF_SIZE / dx,
            scale_y: REF_SIZE / dy,
            offset_x: axis_offset(sx, REF_SIZE / dx),
            offset_y: axis_offset(sy, REF_SIZE / dy),
        };
        debug!(?calibration, sx, sy, dx, dy, "derived page calibration");
        Some(calibration)
    }

    /// Map a nominal page point through the correction, yielding the point
    /// the printer will be asked to put ink at.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.scale_x * (x + self.offset_x), self.scale_y * (y + self.offset_y))
    }
}

fn axis_offset(start: f64, scale: f64) -> f64 {
    ((REF_OFFSET - start) - (REF_OFFSET * scale - REF_OFFSET)) / scale
}

/// Compose the printable calibration reference page.
pub fn calibration_page(paper: PaperSize) -> Document {
    let mut doc = Document::new(paper.width(), paper.height(), None);

    doc.push(Shape::outlined(REF_OFFSET, REF_OFFSET, REF_SIZE, REF_SIZE, 0.3));

    // measured segments: offset (0..50) and size (50..150), per axis
    let guide_y = REF_OFFSET + REF_SIZE + 20.0;
    arrow(&mut doc, (0.0, guide_y), (REF_OFFSET, guide_y), "50 mm");
    arrow(
        &mut doc,
        (REF_OFFSET, guide_y + 12.0),
        (REF_OFFSET + REF_SIZE, guide_y + 12.0),
        "100 mm",
    );
    let guide_x = REF_OFFSET + REF_SIZE + 20.0;
    arrow(&mut doc, (guide_x, 0.0), (guide_x, REF_OFFSET), "50 mm");
    arrow(
        &mut doc,
        (guide_x + 12.0, REF_OFFSET),
        (guide_x + 12.0, REF_OFFSET + REF_SIZE),
        "100 mm",
    );

    doc
}

/// A double-headed measurement arrow with a centered caption.
fn arrow(doc: &mut Document, from: (f64, f64), to: (f64, f64), caption: &str) {
    const HEAD: f64 = 2.0;
    let vertical = from.0 == to.0;

    doc.push(Shape::Line { x1: from.0, y1: from.1, x2: to.0, y2: to.1, width: 0.2 });
    for (tip, dir) in [(from, 1.0), (to, -1.0)] {
        let (dx, dy) = if vertical { (0.0, dir * HEAD) } else { (dir * HEAD, 0.0) };
        doc.push(Shape::Line {
            x1: tip.0,
            y1: tip.1,
            x2: tip.0 + dx - dy * 0.5,
            y2: tip.1 + dy - dx * 0.5,
            width: 0.2,
        });
        doc.push(Shape::Line {
            x1: tip.0,
            y1: tip.1,
            x2: tip.0 + dx + dy * 0.5,
            y2: tip.1 + dy + dx * 0.5,
            width: 0.2,
        });
    }

    let (cx, cy) = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    let (tx, ty) = if vertical { (cx + 3.0, cy) } else { (cx, cy - 2.0) };
    doc.push(Shape::Text { x: tx, y: ty, size: 4.0, anchor: TextAnchor::Middle, content: caption.into() });
}
