//! Full-page composition: grid slots × label records → one vector document.

use tracing::{debug, trace};

use crate::calibration::Calibration;
use crate::draw::Document;
use crate::error::Result;
use crate::label::{LabelRecord, LabelRenderer};
use crate::layout::PageLayout;

/// Compose one printable sheet.
///
/// Slots are filled in row-major order with the records at the matching
/// index; slots past the end of `records` stay empty, and records past
/// [`PageLayout::max_labels`] are ignored. Any malformed record aborts the
/// whole page; pre-check a job with [`LabelRecord::validate`] to skip bad
/// records instead.
pub fn compose_page(
    layout: &PageLayout,
    records: &[LabelRecord],
    calibration: Option<Calibration>,
) -> Result<Document> {
    let mut doc = Document::new(layout.page_width, layout.page_height, calibration);
    let renderer = LabelRenderer::new(layout.label_width, layout.label_height);

    debug!(
        slots = layout.max_labels(),
        records = records.len(),
        calibrated = calibration.map_or(false, |c| !c.is_identity()),
        "composing label sheet"
    );

    for slot in layout.slots().take(records.len()) {
        let record = &records[slot.index];
        trace!(index = slot.index, value = %record.value, "rendering label");
        doc.extend(renderer.render(record, slot.x, slot.y, layout.border)?);
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use crate::error::LabelError;
    use crate::label::{sequence, LabelMode};
    use crate::layout::PaperSize;

    fn bar_count(doc: &Document) -> usize {
        doc.shapes()
            .iter()
            .filter(|s| matches!(s, Shape::Rect { fill: Some("black"), .. }))
            .count()
    }

    #[test]
    fn empty_job_produces_an_empty_page_of_the_right_size() {
        let layout = PageLayout::new(PaperSize::A4);
        let doc = compose_page(&layout, &[], None).unwrap();
        assert_eq!(doc.shapes().len(), 0);

        let svg = doc.to_svg();
        assert!(svg.contains(r#"width="210mm" height="297mm" viewBox="0 0 210 297""#));
    }

    #[test]
    fn excess_records_are_ignored() {
        let layout = PageLayout {
            page_width: 100.0,
            page_height: 30.0,
            label_width: 90.0,
            label_height: 20.0,
            margin_left: 5.0,
            margin_top: 5.0,
            column_spacing: 0.0,
            row_spacing: 0.0,
            border: false,
        };
        assert_eq!(layout.max_labels(), 1);

        let records = sequence("TAPE", 0, 3, "L5", LabelMode::Simple).unwrap();
        let doc = compose_page(&layout, &records, None).unwrap();
        // one label only: 10 characters of 5 bars
        assert_eq!(bar_count(&doc), 50);
    }

    #[test]
    fn every_slot_with_a_record_is_rendered() {
        let layout = PageLayout::new(PaperSize::A4);
        let records = sequence("TAPE", 0, 5, "L5", LabelMode::Simple).unwrap();
        let doc = compose_page(&layout, &records, None).unwrap();
        assert_eq!(bar_count(&doc), 5 * 50);
    }

    #[test]
    fn one_malformed_record_aborts_the_page() {
        let layout = PageLayout::new(PaperSize::A4);
        let mut records = sequence("TAPE", 0, 3, "L5", LabelMode::Simple).unwrap();
        records[1].value.push('9');

        assert_eq!(
            compose_page(&layout, &records, None).unwrap_err(),
            LabelError::BadValueLength(7)
        );
    }

    #[test]
    fn composition_is_idempotent() {
        let layout = PageLayout::new(PaperSize::A4);
        let records = sequence("TAPE", 0, 10, "L5", LabelMode::Color).unwrap();
        let calibration = Calibration::from_measured(Some(49.0), Some(50.5), Some(101.0), Some(99.5));

        let a = compose_page(&layout, &records, calibration).unwrap().to_svg();
        let b = compose_page(&layout, &records, calibration).unwrap().to_svg();
        assert_eq!(a, b);
    }

    #[test]
    fn calibration_wraps_the_whole_page() {
        let layout = PageLayout::new(PaperSize::A4);
        let records = sequence("TAPE", 0, 1, "L5", LabelMode::Simple).unwrap();
        let calibration = Calibration::from_measured(Some(50.0), Some(50.0), Some(102.0), Some(100.0));

        let svg = compose_page(&layout, &records, calibration).unwrap().to_svg();
        assert!(svg.contains(r#"transform="scale(0.9804 1) translate(1 0)""#));
    }
}
