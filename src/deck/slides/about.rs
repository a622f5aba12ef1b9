use crate::deck::chrome::add_header;
use crate::deck::layout::{Grid, shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, AutoShapeType, MutablePresentation, MutableSlide};

const STATS: [(&str, &str); 4] = [
    ("100+", "Professionals\nWorldwide"),
    ("20+", "Locations\nGlobally"),
    ("15+", "Years of\nExperience"),
    ("40%", "Annual\nGrowth"),
];

const STAT_ROW: Grid = Grid::row(0.7, 4.5, 3.1);

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "About Aventra Consulting");

    let body = text_box_at(slide, 0.5, 1.5, 12.0, 2.0).text_frame_mut();
    body.word_wrap(true);
    body.add_paragraph(
        "Founded in 2025, Aventra Consulting is among the largest IT and business consulting \
         services firms in the world. We are insights-driven and outcomes-based to help \
         accelerate returns on your investments.",
    )
    .size(20.0)
    .color(palette.dark_gray);
    body.add_paragraph("");
    body.add_paragraph(
        "Our success is built on a unique member-owner culture where our professionals are \
         also shareholders. This structure aligns our interests with those of our clients and \
         ensures long-term commitment to quality and excellence.",
    )
    .size(18.0)
    .color(palette.dark_gray);

    for (i, (number, label)) in STATS.iter().enumerate() {
        let cell = STAT_ROW.cell(i);

        shape_at(slide, AutoShapeType::RoundedRectangle, cell.x, cell.y, 2.8, 2.3)
            .fill(palette.secondary)
            .no_line();

        text_box_at(slide, cell.x, 4.7, 2.8, 1.0)
            .text_frame_mut()
            .add_paragraph(number)
            .size(44.0)
            .bold(true)
            .color(palette.white)
            .align(Alignment::Center);

        text_box_at(slide, cell.x, 5.6, 2.8, 1.0)
            .text_frame_mut()
            .add_paragraph(label)
            .size(16.0)
            .color(palette.white)
            .align(Alignment::Center);
    }

    slide
}
