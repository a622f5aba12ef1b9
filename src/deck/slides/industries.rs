use crate::deck::chrome::{add_header, add_subtitle};
use crate::deck::layout::{Grid, shape_at, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{AutoShapeType, MutablePresentation, MutableSlide};

const INDUSTRIES: [(&str, &str); 9] = [
    ("Banking", "Modernize operations, enhance customer experiences"),
    ("Government", "Digital transformation for better citizen services"),
    ("Healthcare", "Innovative technology for patient outcomes"),
    ("Manufacturing", "Industry 4.0 and supply chain optimization"),
    ("Retail", "Omnichannel experiences for consumers"),
    ("Energy & Utilities", "Sustainable, digital-first operations"),
    ("Oil & Gas", "Safety, compliance, and efficiency"),
    ("IT", "Scalable digital infrastructure"),
    ("Insurance", "Risk management and compliance"),
];

const GRID: Grid = Grid::new(0.5, 2.1, 4.2, 1.75, 3);

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Industries We Serve");
    add_subtitle(
        slide,
        palette,
        "Industry-specific insights and solutions to navigate unique challenges and seize opportunities",
    );

    for (i, (industry, desc)) in INDUSTRIES.iter().enumerate() {
        let cell = GRID.cell(i);

        shape_at(slide, AutoShapeType::RoundedRectangle, cell.x, cell.y, 4.0, 1.5)
            .fill(palette.light_gray)
            .line(palette.secondary);

        text_box_at(slide, cell.x + 0.2, cell.y + 0.2, 3.6, 0.5)
            .text_frame_mut()
            .add_paragraph(industry)
            .size(16.0)
            .bold(true)
            .color(palette.primary);

        let description = text_box_at(slide, cell.x + 0.2, cell.y + 0.65, 3.6, 0.8).text_frame_mut();
        description.word_wrap(true);
        description
            .add_paragraph(desc)
            .size(12.0)
            .color(palette.dark_gray);
    }

    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::slides::{assert_placed_at, built};
    use crate::ooxml::pptx::{Fill, LineFormat};

    #[test]
    fn test_industries_slide() {
        let palette = Palette::aventra();
        let slide = built(build);
        assert_eq!(slide.shape_count(), 3 + 9 * 3);

        for card in slide.shapes().iter().skip(3).step_by(3) {
            assert_eq!(card.fill_format(), Fill::Solid(palette.light_gray));
            assert_eq!(card.line_format(), LineFormat::Solid(palette.secondary));
        }
        assert!(slide.texts().contains(&"Oil & Gas"));
    }

    #[test]
    fn test_industry_cards_on_three_column_grid() {
        let slide = built(build);
        let columns = [0.5, 4.7, 8.9];
        let rows = [2.1, 3.85, 5.6];
        for i in 0..9 {
            let (x, y) = (columns[i % 3], rows[i / 3]);
            assert_placed_at(&slide.shapes()[3 + i * 3], x, y);
            assert_placed_at(&slide.shapes()[4 + i * 3], x + 0.2, y + 0.2);
            assert_placed_at(&slide.shapes()[5 + i * 3], x + 0.2, y + 0.65);
        }
    }
}
