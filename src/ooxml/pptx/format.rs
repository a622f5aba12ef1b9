//! Format types for PPTX presentations.

use crate::common::RGBColor;

/// Preset geometry of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl AutoShapeType {
    /// The `prst` value of `<a:prstGeom>`.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Oval => "ellipse",
        }
    }

    /// Base name PowerPoint gives new shapes of this kind.
    pub fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Oval => "Oval",
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

impl Alignment {
    /// The `algn` attribute value of `<a:pPr>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
        }
    }
}

/// Shape fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    /// No fill element; the shape style decides
    #[default]
    Inherit,
    /// Explicitly transparent
    None,
    Solid(RGBColor),
}

/// Shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// No line element; the shape style decides
    #[default]
    Inherit,
    /// Explicitly no outline
    None,
    Solid(RGBColor),
}

/// Character formatting applied to every run of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Font {
    /// Font size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub color: Option<RGBColor>,
}

impl Font {
    /// Whether any property is set.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.bold.is_none() && self.color.is_none()
    }
}
