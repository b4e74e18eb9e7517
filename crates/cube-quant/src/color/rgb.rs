//! RGB color type.
//!
//! Channels are carried as floats on the 0..=255 scale so that error
//! diffusion can accumulate sub-unit amounts. Display values are clamped
//! to the byte range only at conversion boundaries.

use std::str::FromStr;

use crate::palette::ParseColorError;

/// An RGB color with float channels on the 0..=255 scale.
///
/// Values may drift outside 0..=255 while error diffusion is running; that
/// is expected. [`Rgb::clamped`] produces an in-range copy for display or
/// LAB conversion, and [`Rgb::to_bytes`] rounds and clamps for output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (nominally 0.0..=255.0)
    pub r: f32,
    /// Green channel (nominally 0.0..=255.0)
    pub g: f32,
    /// Blue channel (nominally 0.0..=255.0)
    pub b: f32,
}

impl Rgb {
    /// Create a new color from float channel values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use cube_quant::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`, rounding and clamping to 0..=255.
    ///
    /// # Example
    /// ```
    /// use cube_quant::Rgb;
    /// let hot = Rgb::new(270.4, -3.0, 127.6);
    /// assert_eq!(hot.to_bytes(), [255, 0, 128]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Return a copy with every channel clamped to 0.0..=255.0.
    ///
    /// The quantizer calls this on working values before LAB conversion;
    /// the stored working value itself is never clamped.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 255.0),
            g: self.g.clamp(0.0, 255.0),
            b: self.b.clamp(0.0, 255.0),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB`, and `RGB`. Case-insensitive;
    /// surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_quant::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.to_bytes(), [255, 255, 255]);
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let color = Rgb::from_u8(255, 128, 0);
        assert_eq!(color.r, 255.0);
        assert_eq!(color.g, 128.0);
        assert_eq!(color.b, 0.0);

        assert_eq!(Rgb::from_bytes([255, 128, 0]), color);
    }

    #[test]
    fn test_to_bytes_rounds_and_clamps() {
        assert_eq!(Rgb::new(0.4, 0.5, 0.6).to_bytes(), [0, 1, 1]);
        assert_eq!(Rgb::new(-12.0, 300.0, 255.0).to_bytes(), [0, 255, 255]);
    }

    #[test]
    fn test_clamped_leaves_in_range_values() {
        let c = Rgb::new(10.5, 200.0, 0.0);
        assert_eq!(c.clamped(), c);

        let hot = Rgb::new(-5.0, 260.0, 128.0);
        let clamped = hot.clamped();
        assert_eq!(clamped, Rgb::new(0.0, 255.0, 128.0));
        // original untouched
        assert_eq!(hot.r, -5.0);
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white.to_bytes(), [255, 255, 255]);

        let no_hash: Rgb = "00469F".parse().unwrap();
        assert_eq!(no_hash.to_bytes(), [0, 70, 159]);
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Rgb = "#ABC".parse().unwrap();
        assert_eq!(color, Rgb::from_u8(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
    }

    #[test]
    fn test_hex_parsing_case_and_whitespace() {
        let upper: Rgb = "#ABCDEF".parse().unwrap();
        let lower: Rgb = "  #abcdef ".parse().unwrap();
        assert_eq!(upper, lower);
    }
}
