use crate::common::RGBColor;
use crate::deck::chrome::{add_header, add_subtitle};
use crate::deck::layout::{Grid, shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, AutoShapeType, MutablePresentation, MutableSlide};

const SERVICES: [&str; 9] = [
    "Business Consulting",
    "Enterprise Solutions",
    "Managed IT Services",
    "Artificial Intelligence",
    "Data Analytics",
    "Cloud & Hybrid IT",
    "Core Tech Expertise",
    "Staff Augmentation",
    "Business Process Services",
];

const GRID: Grid = Grid::new(0.5, 2.2, 4.2, 1.7, 3);

/// Box colour by grid row: primary, secondary, then accent.
fn row_color(palette: &Palette, row: usize) -> RGBColor {
    match row {
        0 => palette.primary,
        1 => palette.secondary,
        _ => palette.accent,
    }
}

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Our Services");
    add_subtitle(
        slide,
        palette,
        "End-to-end services to meet the ever-evolving digital expectations of your customers",
    );

    for (i, service) in SERVICES.iter().enumerate() {
        let cell = GRID.cell(i);

        shape_at(slide, AutoShapeType::RoundedRectangle, cell.x, cell.y, 4.0, 1.4)
            .fill(row_color(palette, cell.row))
            .no_line();

        text_box_at(slide, cell.x + 0.2, cell.y + 0.4, 3.6, 0.8)
            .text_frame_mut()
            .add_paragraph(service)
            .size(18.0)
            .bold(true)
            .color(palette.white)
            .align(Alignment::Center);
    }

    slide
}
