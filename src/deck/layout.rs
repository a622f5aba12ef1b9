//! Placement helpers.
//!
//! Slide content is authored in inches. Positions are summed in inches and
//! only converted to EMUs at the shape boundary, so a box at `x + 0.3` lands
//! on exactly the EMU the same arithmetic would give anywhere else.

use crate::common::unit::inches_to_emu;
use crate::ooxml::pptx::{AutoShapeType, MutableShape, MutableSlide};

/// Row-major grid placement for multi-item slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin_x: f64,
    origin_y: f64,
    col_stride: f64,
    row_stride: f64,
    columns: usize,
}

/// Where item `i` of a grid lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
    /// Left edge in inches
    pub x: f64,
    /// Top edge in inches
    pub y: f64,
}

impl Grid {
    pub const fn new(
        origin_x: f64,
        origin_y: f64,
        col_stride: f64,
        row_stride: f64,
        columns: usize,
    ) -> Self {
        Self {
            origin_x,
            origin_y,
            col_stride,
            row_stride,
            columns,
        }
    }

    /// A single left-to-right row.
    pub const fn row(origin_x: f64, y: f64, col_stride: f64) -> Self {
        Self::new(origin_x, y, col_stride, 0.0, usize::MAX)
    }

    pub fn cell(&self, index: usize) -> Cell {
        let column = index % self.columns;
        let row = index / self.columns;
        Cell {
            column,
            row,
            x: self.origin_x + column as f64 * self.col_stride,
            y: self.origin_y + row as f64 * self.row_stride,
        }
    }
}

/// Add a preset shape positioned in inches.
pub(crate) fn shape_at(
    slide: &mut MutableSlide,
    shape_type: AutoShapeType,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> &mut MutableShape {
    slide.add_shape(
        shape_type,
        inches_to_emu(x),
        inches_to_emu(y),
        inches_to_emu(width),
        inches_to_emu(height),
    )
}

/// Add a text box positioned in inches.
pub(crate) fn text_box_at(
    slide: &mut MutableSlide,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> &mut MutableShape {
    slide.add_text_box(
        inches_to_emu(x),
        inches_to_emu(y),
        inches_to_emu(width),
        inches_to_emu(height),
    )
}
