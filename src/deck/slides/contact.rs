use crate::deck::chrome::add_background;
use crate::deck::layout::{shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, AutoShapeType, MutablePresentation, MutableSlide};

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_background(slide, palette);

    text_box_at(slide, 0.5, 1.0, 12.0, 1.0)
        .text_frame_mut()
        .add_paragraph("Let's Connect")
        .size(48.0)
        .bold(true)
        .color(palette.white)
        .align(Alignment::Center);

    text_box_at(slide, 0.5, 2.0, 12.0, 0.8)
        .text_frame_mut()
        .add_paragraph("Ready to transform your business?")
        .size(28.0)
        .color(palette.accent)
        .align(Alignment::Center);

    shape_at(slide, AutoShapeType::RoundedRectangle, 2.5, 3.0, 8.3, 3.8)
        .fill(palette.white)
        .no_line();

    let address = text_box_at(slide, 3.0, 3.3, 7.3, 1.2).text_frame_mut();
    address.word_wrap(true);
    address
        .add_paragraph("📍 Global Headquarters")
        .size(18.0)
        .bold(true)
        .color(palette.primary);
    for line in [
        "Akasa Coworking, 3rd Floor, Tower - B",
        "UNITECH CYBER PARK, Sector - 39, Gurugram, India",
    ] {
        address
            .add_paragraph(line)
            .size(14.0)
            .color(palette.dark_gray);
    }

    text_box_at(slide, 3.0, 4.8, 7.3, 0.7)
        .text_frame_mut()
        .add_paragraph("📞 +91 9070030003 | +91 8713001002")
        .size(16.0)
        .color(palette.dark_gray);

    text_box_at(slide, 3.0, 5.5, 7.3, 0.7)
        .text_frame_mut()
        .add_paragraph("✉️ sales@consultaventra.com")
        .size(16.0)
        .color(palette.dark_gray);

    text_box_at(slide, 3.0, 6.2, 7.3, 0.5)
        .text_frame_mut()
        .add_paragraph("🌐 www.consultaventra.com")
        .size(16.0)
        .color(palette.secondary);

    slide
}
