use crate::deck::chrome::add_header;
use crate::deck::layout::{shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{AutoShapeType, MutablePresentation, MutableSlide};

const HIGHLIGHTS: [&str; 4] = [
    "Strategic business consulting to drive sustainable growth and organizational excellence",
    "End-to-end business process services enhancing efficiency, scalability, and operational performance",
    "Managed IT services to ensure optimal performance and security",
    "AI solutions to automate processes and enhance decision-making",
];

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Excellence Delivered");

    shape_at(slide, AutoShapeType::RoundedRectangle, 0.5, 1.6, 12.3, 2.2)
        .fill(palette.light_gray)
        .line(palette.secondary);

    text_box_at(slide, 0.8, 1.8, 11.7, 0.6)
        .text_frame_mut()
        .add_paragraph("MAPFRE USA - Insurance Modernization")
        .size(24.0)
        .bold(true)
        .color(palette.primary);

    let summary = text_box_at(slide, 0.8, 2.5, 11.7, 1.0).text_frame_mut();
    summary.word_wrap(true);
    summary
        .add_paragraph(
            "With our help, MAPFRE USA migrated to a modern core platform, driving faster \
             claims, better underwriting and data-powered growth. Reimagining insurance \
             through modernization.",
        )
        .size(18.0)
        .color(palette.dark_gray);

    for (i, highlight) in HIGHLIGHTS.iter().enumerate() {
        let y = 4.2 + i as f64 * 0.75;
        let line = text_box_at(slide, 0.8, y, 11.7, 0.7).text_frame_mut();
        line.word_wrap(true);
        line.add_paragraph(&format!("✓ {}", highlight))
            .size(16.0)
            .color(palette.secondary);
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::inches_to_emu;
    use crate::deck::slides::built;

    #[test]
    fn test_case_study_slide() {
        let slide = built(build);
        assert_eq!(slide.shape_count(), 2 + 3 + 4);

        let checks: Vec<_> = slide.shapes().iter().skip(5).collect();
        for (i, check) in checks.iter().enumerate() {
            assert_eq!(check.position().1, inches_to_emu(4.2 + i as f64 * 0.75));
            assert!(check.text_frame().text().starts_with("✓ "));
        }
        // last line ends at 7.15in
        assert!(checks[3].fits_within(12_191_695, 6_858_000));
    }
}
