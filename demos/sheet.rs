//! Print a full A4 sheet of colored tape labels to stdout.
//!
//! ```sh
//! cargo run --example sheet > labels.svg
//! ```

use code39_labels::{compose_page, sequence, LabelError, LabelMode, PageLayout, PaperSize};

fn main() -> Result<(), LabelError> {
    let layout = PageLayout::new(PaperSize::A4);
    let records = sequence("TAPE", 0, layout.max_labels() as u32, "L5", LabelMode::Color)?;
    let page = compose_page(&layout, &records, None)?;
    println!("{page}");
    Ok(())
}
