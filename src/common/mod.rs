//! Common types and utilities shared by the package writer and the deck content.

pub mod style;
pub mod unit;
pub mod xml;

pub use style::RGBColor;
