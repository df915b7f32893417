//! Print the calibration reference page to stdout, and show the correction
//! derived from a sample measurement.
//!
//! ```sh
//! cargo run --example calibrate > calibration.svg
//! ```

use code39_labels::{calibration_page, Calibration, PaperSize};

fn main() {
    let page = calibration_page(PaperSize::A4);
    println!("{page}");

    // e.g. the printed square started at 49.5/50.2 mm and measured
    // 101 x 100.5 mm
    if let Some(c) = Calibration::from_measured(Some(49.5), Some(50.2), Some(101.0), Some(100.5)) {
        eprintln!(
            "correction: scale ({:.4}, {:.4}), offset ({:.2}, {:.2}) mm",
            c.scale_x, c.scale_y, c.offset_x, c.offset_y
        );
    }
}
