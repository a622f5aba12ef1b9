use crate::deck::chrome::{add_header, add_subtitle};
use crate::deck::layout::{Grid, shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, AutoShapeType, MutablePresentation, MutableSlide};

const REGIONS: [(&str, &str); 4] = [
    ("Middle East", "Saudi Arabia, Bahrain, UAE, Kuwait"),
    ("Europe", "UK, France, Germany, Sweden, Italy, Norway"),
    ("Australia & Oceania", "Australia, New Zealand"),
    ("Americas", "Columbia, Puerto Rico"),
];

const COLUMNS: Grid = Grid::row(0.5, 2.3, 3.2);

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Global Presence");
    add_subtitle(
        slide,
        palette,
        "We provide a global antenna based on facts, not hype, to help improve returns on your IT and business investments",
    );

    let colors = palette.rotation();
    for (i, (region, countries)) in REGIONS.iter().enumerate() {
        let cell = COLUMNS.cell(i);

        shape_at(slide, AutoShapeType::RoundedRectangle, cell.x, cell.y, 3.0, 4.5)
            .fill(colors[i])
            .no_line();

        text_box_at(slide, cell.x + 0.2, 2.6, 2.6, 0.7)
            .text_frame_mut()
            .add_paragraph(region)
            .size(20.0)
            .bold(true)
            .color(palette.white)
            .align(Alignment::Center);

        let list = text_box_at(slide, cell.x + 0.2, 3.5, 2.6, 3.0).text_frame_mut();
        list.word_wrap(true);
        // Bullets follow the frame's initial empty paragraph.
        list.add_paragraph("");
        for country in countries.split(", ") {
            list.add_paragraph(&format!("• {}", country))
                .size(14.0)
                .color(palette.white);
        }
    }

    slide
}
