use crate::deck::chrome::{add_header, add_subtitle};
use crate::deck::layout::{Grid, shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{Alignment, AutoShapeType, MutablePresentation, MutableSlide};

const LEADERS: [(&str, &str); 3] = [
    ("Vikas Grover", "President and CEO"),
    ("Deepinti Grover", "Chief Operating Officer"),
    ("Rovil Mahajan", "Executive Vice-President and CFO"),
];

const COLUMNS: Grid = Grid::row(1.5, 2.5, 4.0);

/// First character of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Leadership Team");
    add_subtitle(
        slide,
        palette,
        "Decades of experience in technology, business consulting, and strategic management",
    );

    for (i, (name, title)) in LEADERS.iter().enumerate() {
        let x = COLUMNS.cell(i).x;

        shape_at(slide, AutoShapeType::Oval, x, 2.5, 2.5, 2.5)
            .fill(palette.secondary)
            .line(palette.primary);

        text_box_at(slide, x, 3.2, 2.5, 1.0)
            .text_frame_mut()
            .add_paragraph(&initials(name))
            .size(48.0)
            .bold(true)
            .color(palette.white)
            .align(Alignment::Center);

        text_box_at(slide, x - 0.5, 5.2, 3.5, 0.6)
            .text_frame_mut()
            .add_paragraph(name)
            .size(20.0)
            .bold(true)
            .color(palette.primary)
            .align(Alignment::Center);

        let role = text_box_at(slide, x - 0.5, 5.7, 3.5, 0.8).text_frame_mut();
        role.word_wrap(true);
        role.add_paragraph(title)
            .size(14.0)
            .color(palette.dark_gray)
            .align(Alignment::Center);
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::slides::{assert_placed_at, built};
    use crate::ooxml::pptx::{LineFormat, ShapeKind};

    #[test]
    fn test_initials() {
        assert_eq!(initials("Vikas Grover"), "VG");
        assert_eq!(initials("Deepinti Grover"), "DG");
        assert_eq!(initials("Rovil Mahajan"), "RM");
        assert_eq!(initials("  spaced   out  "), "so");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_leadership_slide() {
        let slide = built(build);
        assert_eq!(slide.shape_count(), 3 + 3 * 4);

        let portrait = &slide.shapes()[3];
        assert_eq!(portrait.kind(), ShapeKind::AutoShape(AutoShapeType::Oval));
        assert_eq!(portrait.line_format(), LineFormat::Solid(Palette::AVENTRA.primary));

        let texts = slide.texts();
        for expected in ["VG", "DG", "RM", "Executive Vice-President and CFO"] {
            assert!(texts.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_leader_columns() {
        let slide = built(build);
        for (i, x) in [1.5, 5.5, 9.5].into_iter().enumerate() {
            assert_placed_at(&slide.shapes()[3 + i * 4], x, 2.5);
            assert_placed_at(&slide.shapes()[4 + i * 4], x, 3.2);
            assert_placed_at(&slide.shapes()[5 + i * 4], x - 0.5, 5.2);
            assert_placed_at(&slide.shapes()[6 + i * 4], x - 0.5, 5.7);
        }
    }
}
