//! The Aventra company profile deck.
//!
//! The deck is an ordered list of slide steps. [`build_with`] runs every step
//! against one widescreen presentation, then writes the package to disk.

pub mod chrome;
pub mod layout;
pub mod palette;
pub mod slides;

use crate::config::Settings;
use crate::error::Result;
use crate::ooxml::pptx::MutablePresentation;
use std::fmt;
use std::path::{Path, PathBuf};

pub use palette::Palette;
use slides::SlideFn;

/// Identifies a slide of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Title,
    About,
    Values,
    Services,
    ServicesDetail,
    Industries,
    Geography,
    Leadership,
    CaseStudy,
    Contact,
    ThankYou,
}

impl SlideKind {
    /// Human-readable name, also stored as the slide name in the package.
    pub fn label(&self) -> &'static str {
        match self {
            SlideKind::Title => "Title",
            SlideKind::About => "About Us",
            SlideKind::Values => "Our Values",
            SlideKind::Services => "Services",
            SlideKind::ServicesDetail => "Services Detail",
            SlideKind::Industries => "Industries",
            SlideKind::Geography => "Global Presence",
            SlideKind::Leadership => "Leadership",
            SlideKind::CaseStudy => "Case Study",
            SlideKind::Contact => "Contact",
            SlideKind::ThankYou => "Thank You",
        }
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A deck entry: which slide, and the function that draws it.
#[derive(Clone, Copy)]
pub struct SlideStep {
    pub kind: SlideKind,
    pub build: SlideFn,
}

impl fmt::Debug for SlideStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideStep").field("kind", &self.kind).finish()
    }
}

/// Slides in presentation order.
pub const DECK: [SlideStep; 11] = [
    SlideStep { kind: SlideKind::Title, build: slides::title::build },
    SlideStep { kind: SlideKind::About, build: slides::about::build },
    SlideStep { kind: SlideKind::Values, build: slides::values::build },
    SlideStep { kind: SlideKind::Services, build: slides::services::build },
    SlideStep { kind: SlideKind::ServicesDetail, build: slides::services_detail::build },
    SlideStep { kind: SlideKind::Industries, build: slides::industries::build },
    SlideStep { kind: SlideKind::Geography, build: slides::geography::build },
    SlideStep { kind: SlideKind::Leadership, build: slides::leadership::build },
    SlideStep { kind: SlideKind::CaseStudy, build: slides::case_study::build },
    SlideStep { kind: SlideKind::Contact, build: slides::contact::build },
    SlideStep { kind: SlideKind::ThankYou, build: slides::thank_you::build },
];

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub path: PathBuf,
    pub slide_count: usize,
}

/// Build the deck in memory without writing it.
pub fn compose() -> MutablePresentation {
    let palette = Palette::aventra();
    let mut pres = MutablePresentation::widescreen();
    let (canvas_width, canvas_height) = (pres.slide_width(), pres.slide_height());

    for step in &DECK {
        let slide = (step.build)(&mut pres, &palette);
        slide.set_name(step.kind.label());

        for shape in slide.shapes() {
            if !shape.fits_within(canvas_width, canvas_height) {
                log::warn!(
                    "{} on slide '{}' extends past the canvas",
                    shape.name(),
                    step.kind
                );
            }
        }
        log::debug!("built slide '{}' with {} shapes", step.kind, slide.shape_count());
    }

    pres
}

/// Build the deck and write it to `settings.output_path`.
pub fn build_with(settings: &Settings) -> Result<BuildReport> {
    let pres = compose();
    pres.save(&settings.output_path)?;

    Ok(BuildReport {
        path: settings.output_path.clone(),
        slide_count: pres.slide_count(),
    })
}

/// Build the deck with the default canvas and write it to `output_path`.
pub fn build(output_path: impl AsRef<Path>) -> Result<BuildReport> {
    build_with(&Settings::with_output_path(output_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_order() {
        let kinds: Vec<SlideKind> = DECK.iter().map(|step| step.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Title,
                SlideKind::About,
                SlideKind::Values,
                SlideKind::Services,
                SlideKind::ServicesDetail,
                SlideKind::Industries,
                SlideKind::Geography,
                SlideKind::Leadership,
                SlideKind::CaseStudy,
                SlideKind::Contact,
                SlideKind::ThankYou,
            ]
        );
    }

    #[test]
    fn test_compose() {
        let pres = compose();
        assert_eq!(pres.slide_count(), 11);
        assert_eq!(pres.slide_width(), 12_191_695);
        assert_eq!(pres.slide_height(), 6_858_000);

        let names: Vec<Option<&str>> = pres.slides().iter().map(|slide| slide.name()).collect();
        assert_eq!(names[0], Some("Title"));
        assert_eq!(names[10], Some("Thank You"));
    }

    #[test]
    fn test_every_shape_fits_the_canvas() {
        let pres = compose();
        for (slide, step) in pres.slides().iter().zip(DECK.iter()) {
            for shape in slide.shapes() {
                assert!(
                    shape.fits_within(pres.slide_width(), pres.slide_height()),
                    "{} on {}",
                    shape.name(),
                    step.kind
                );
            }
        }
    }

    #[test]
    fn test_first_shape_spans_the_canvas_width() {
        let pres = compose();
        for slide in pres.slides() {
            let (width, _) = slide.shapes()[0].size();
            assert_eq!(width, pres.slide_width(), "{:?}", slide.name());
        }
    }

    #[test]
    fn test_values_and_geography_share_rotation() {
        let pres = compose();
        let box_fills = |slide_index: usize, first: usize| {
            pres.slides()[slide_index]
                .shapes()
                .iter()
                .skip(first)
                .step_by(3)
                .take(4)
                .map(|shape| shape.fill_format())
                .collect::<Vec<_>>()
        };
        assert_eq!(box_fills(2, 2), box_fills(6, 3));
    }

    #[test]
    fn test_build_reports_path_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.pptx");
        let report = build(&path).unwrap();
        assert_eq!(report.slide_count, 11);
        assert_eq!(report.path, path);
        assert!(path.exists());
    }
}
