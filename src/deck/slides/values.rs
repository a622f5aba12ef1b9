use crate::deck::chrome::add_header;
use crate::deck::layout::{Grid, shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{AutoShapeType, MutablePresentation, MutableSlide};

const VALUES: [(&str, &str); 4] = [
    (
        "Partnership",
        "We work side-by-side with our clients as trusted advisors, not just service providers.",
    ),
    (
        "Quality",
        "We deliver excellence in everything we do, ensuring sustainable outcomes for our clients.",
    ),
    (
        "Integrity",
        "We operate with transparency, honesty, and respect in all our relationships.",
    ),
    (
        "Innovation",
        "We continuously evolve our capabilities to help clients navigate changing technology landscapes.",
    ),
];

const GRID: Grid = Grid::new(0.5, 1.7, 6.3, 2.8, 2);

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Our Core Values");

    let colors = palette.rotation();
    for (i, (value, desc)) in VALUES.iter().enumerate() {
        let cell = GRID.cell(i);

        shape_at(slide, AutoShapeType::RoundedRectangle, cell.x, cell.y, 6.0, 2.5)
            .fill(colors[i])
            .no_line();

        text_box_at(slide, cell.x + 0.3, cell.y + 0.3, 5.4, 0.6)
            .text_frame_mut()
            .add_paragraph(value)
            .size(26.0)
            .bold(true)
            .color(palette.white);

        let description = text_box_at(slide, cell.x + 0.3, cell.y + 0.9, 5.4, 1.4).text_frame_mut();
        description.word_wrap(true);
        description
            .add_paragraph(desc)
            .size(16.0)
            .color(palette.white);
    }

    slide
}
