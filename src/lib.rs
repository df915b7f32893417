//! Code 39 barcode label sheet generator.
//!
//! Encodes 6-character values plus a 2-character type suffix as Code 39
//! barcodes, lays them out on a printable label sheet and emits the page as
//! an SVG vector document with exact millimeter dimensions. A calibration
//! page and the matching scale/translate correction compensate for printers
//! that scale or shift their output.
//!
//! ```
//! use code39_labels::{compose_page, sequence, LabelMode, PageLayout, PaperSize};
//!
//! let layout = PageLayout::new(PaperSize::A4);
//! let records = sequence("TAPE", 0, 12, "L5", LabelMode::Color)?;
//! let svg = compose_page(&layout, &records, None)?.to_svg();
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), code39_labels::LabelError>(())
//! ```

mod tables;

pub mod calibration;
pub mod draw;
pub mod error;
pub mod label;
pub mod layout;
pub mod page;
pub mod symbology;

pub use calibration::{calibration_page, Calibration};
pub use draw::{Document, Shape, TextAnchor};
pub use error::{LabelError, Result};
pub use label::{sequence, LabelMode, LabelRecord, LabelRenderer, DIGIT_PALETTE, TYPE_LEN, VALUE_LEN};
pub use layout::{PageLayout, PaperSize, Slot, Slots};
pub use page::compose_page;
pub use symbology::{encode, Code, Element, ElementKind, UNITS_PER_CODE, WIDE_RATIO};
