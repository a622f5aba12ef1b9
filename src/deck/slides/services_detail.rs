use crate::deck::chrome::add_header;
use crate::deck::layout::{Grid, text_box_at};
use crate::deck::palette::Palette;
use crate::ooxml::pptx::{MutablePresentation, MutableSlide};

const OFFERINGS: [(&str, &str); 6] = [
    (
        "Core Tech Expertise",
        "VDI, Virtual Machine, Cloud transformation, EUC services, Service desk, Workplace engineering",
    ),
    (
        "Enterprise Solutions",
        "Digital Transformation, SaaS/PaaS, Enterprise Mobility, CRM Development, Salesforce",
    ),
    (
        "IT Consulting",
        "Real Estate Services, GCC expansion, Technology Solutions, Legal Assistance, Co-Location",
    ),
    (
        "Artificial Intelligence",
        "AI Development, Agentic AI, Machine Learning, Data Analytics, Process Automation",
    ),
    (
        "Business Process Services",
        "Process automation, Workflow optimization, Cost reduction, Quality improvement",
    ),
    (
        "Staff Augmentation",
        "FTE supplies, Work to contract, TNM Model, Offshore Models, Employee Charge back",
    ),
];

const GRID: Grid = Grid::new(0.5, 1.5, 6.3, 2.0, 2);

pub fn build<'p>(pres: &'p mut MutablePresentation, palette: &Palette) -> &'p mut MutableSlide {
    let slide = pres.add_slide();
    add_header(slide, palette, "Service Offerings - Details");

    for (i, (title, details)) in OFFERINGS.iter().enumerate() {
        let cell = GRID.cell(i);

        text_box_at(slide, cell.x, cell.y, 6.0, 0.5)
            .text_frame_mut()
            .add_paragraph(&format!("▸ {}", title))
            .size(18.0)
            .bold(true)
            .color(palette.primary);

        let body = text_box_at(slide, cell.x + 0.3, cell.y + 0.5, 5.7, 1.3).text_frame_mut();
        body.word_wrap(true);
        body.add_paragraph(details)
            .size(14.0)
            .color(palette.dark_gray);
    }

    slide
}
