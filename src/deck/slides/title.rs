use crate::config::{SLIDE_HEIGHT_IN, SLIDE_WIDTH_IN};
use crate::deck::layout::{shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, AutoShapeType, MutablePresentation, MutableSlide};

/// Cover slide: company name, tagline and profile year on a primary field.
pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();

    shape_at(
        slide,
        AutoShapeType::Rectangle,
        0.0,
        0.0,
        SLIDE_WIDTH_IN,
        SLIDE_HEIGHT_IN,
    )
    .fill(palette.primary)
    .no_line();

    text_box_at(slide, 0.5, 2.5, 12.0, 1.5)
        .text_frame_mut()
        .add_paragraph("AVENTRA CONSULTING")
        .size(54.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);

    text_box_at(slide, 0.5, 4.2, 12.0, 1.0)
        .text_frame_mut()
        .add_paragraph("Reimagining Business Through Digital Transformation")
        .size(28.0)
        .color(palette.accent)
        .align(Alignment::Center);

    text_box_at(slide, 0.5, 5.2, 12.0, 1.0)
        .text_frame_mut()
        .add_paragraph("Company Profile 2025")
        .size(22.0)
        .color(palette.white)
        .align(Alignment::Center);

    slide
}
