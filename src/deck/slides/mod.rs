//! One module per slide, each exposing a `build` step.

use crate::ooxml::pptx::{MutablePresentation, MutableSlide};

use super::palette::Palette;

pub mod about;
pub mod case_study;
pub mod contact;
pub mod geography;
pub mod industries;
pub mod leadership;
pub mod services;
pub mod services_detail;
pub mod thank_you;
pub mod title;
pub mod values;

/// Appends one slide to the presentation and hands it back.
pub type SlideFn = for<'p> fn(&'p mut MutablePresentation, &Palette) -> &'p mut MutableSlide;

/// Run a single step against a fresh widescreen presentation.
#[cfg(test)]
pub(crate) fn built(step: SlideFn) -> MutableSlide {
    let mut pres = MutablePresentation::widescreen();
    step(&mut pres, &Palette::aventra()).clone()
}

/// Assert a shape's offset against inch coordinates, allowing for one EMU of
/// float truncation.
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_placed_at(shape: &crate::ooxml::pptx::MutableShape, x: f64, y: f64) {
    use crate::common::unit::inches_to_emu;

    let (actual_x, actual_y) = shape.position();
    assert!(
        (actual_x - inches_to_emu(x)).abs() <= 1 && (actual_y - inches_to_emu(y)).abs() <= 1,
        "{} at ({}, {}) EMU, expected ({}in, {}in)",
        shape.name(),
        actual_x,
        actual_y,
        x,
        y
    );
}
