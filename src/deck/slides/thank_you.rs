use crate::deck::chrome::add_background;
use crate::deck::layout::text_box_at;
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, MutablePresentation, MutableSlide};

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_background(slide, palette);

    text_box_at(slide, 0.5, 2.5, 12.0, 1.5)
        .text_frame_mut()
        .add_paragraph("Thank You")
        .size(72.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);

    text_box_at(slide, 0.5, 4.5, 12.0, 1.0)
        .text_frame_mut()
        .add_paragraph("AVENTRA CONSULTING")
        .size(36.0)
        .color(palette.accent)
        .align(Alignment::Center);

    text_box_at(slide, 0.5, 5.5, 12.0, 0.6)
        .text_frame_mut()
        .add_paragraph("Your Partner in Digital Transformation")
        .size(24.0)
        .color(palette.white)
        .align(Alignment::Center);

    slide
}
