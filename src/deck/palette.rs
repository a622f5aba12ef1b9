//! Brand colours.

use crate::common::RGBColor;

/// The fixed Aventra brand palette.
///
/// Passed by reference to every slide step; nothing reads colours from
/// anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Dark blue
    pub primary: RGBColor,
    /// Medium blue
    pub secondary: RGBColor,
    /// Light blue
    pub accent: RGBColor,
    pub white: RGBColor,
    pub dark_gray: RGBColor,
    pub light_gray: RGBColor,
    /// Fourth entry of the box colour rotation
    pub deep_blue: RGBColor,
}

impl Palette {
    pub const AVENTRA: Palette = Palette {
        primary: RGBColor::new(0, 51, 102),
        secondary: RGBColor::new(0, 102, 153),
        accent: RGBColor::new(0, 153, 204),
        white: RGBColor::new(255, 255, 255),
        dark_gray: RGBColor::new(51, 51, 51),
        light_gray: RGBColor::new(240, 240, 240),
        deep_blue: RGBColor::new(0, 76, 153),
    };

    pub fn aventra() -> Self {
        Self::AVENTRA
    }

    /// Box colours for four-item slides, indexed by item.
    pub fn rotation(&self) -> [RGBColor; 4] {
        [self.primary, self.secondary, self.accent, self.deep_blue]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::aventra()
    }
}
