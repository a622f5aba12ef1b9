use std::fmt;

/// An sRGB colour as written into `<a:srgbClr>`.
///
/// # Examples
///
/// ```rust
/// use aventra_deck::common::RGBColor;
///
/// let navy = RGBColor::new(0, 51, 102);
/// assert_eq!(navy.to_hex(), "003366");
/// assert_eq!(navy.to_string(), "#003366");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to the uppercase hex form used by `<a:srgbClr val="..."/>`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_zero_padded_uppercase() {
        let color = RGBColor::new(0, 153, 204);
        assert_eq!(color.to_hex(), "0099CC");
        assert_eq!(color.to_string(), "#0099CC");
        assert_eq!(RGBColor::new(10, 11, 255).to_hex(), "0A0BFF");
    }
}
