//! Shared slide furniture: the header bar, slide titles and subtitles.

use crate::config::{SLIDE_HEIGHT_IN, SLIDE_WIDTH_IN};
use crate::ooxml::pptx::{AutoShapeType, MutableSlide};

use super::layout::{shape_at, text_box_at};
use super::palette::Palette;

const HEADER_HEIGHT_IN: f64 = 1.2;

/// Primary header bar across the top of the slide with a white title on it.
pub fn add_header(slide: &mut MutableSlide, palette: &Palette, title: &str) {
    shape_at(
        slide,
        AutoShapeType::Rectangle,
        0.0,
        0.0,
        SLIDE_WIDTH_IN,
        HEADER_HEIGHT_IN,
    )
    .fill(palette.primary)
    .no_line();

    text_box_at(slide, 0.5, 0.3, 12.0, 0.8)
        .text_frame_mut()
        .add_paragraph(title)
        .size(36.0)
        .bold(true)
        .color(palette.white);
}

/// Dark-gray line of copy directly under the header bar.
pub fn add_subtitle(slide: &mut MutableSlide, palette: &Palette, text: &str) {
    text_box_at(slide, 0.5, 1.4, 12.0, 0.6)
        .text_frame_mut()
        .add_paragraph(text)
        .size(18.0)
        .color(palette.dark_gray);
}

/// Full-bleed primary rectangle for the cover-style slides.
pub fn add_background(slide: &mut MutableSlide, palette: &Palette) {
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
}
