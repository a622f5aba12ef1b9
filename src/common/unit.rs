//! Unit conversion utilities.
//!
//! Shape geometry is authored in inches and font sizes in points; the package
//! stores English Metric Units (EMU) and hundredths of a point respectively.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMUs, truncating toward zero.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

/// Convert a point size to the centipoint value used by `sz` attributes.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}
