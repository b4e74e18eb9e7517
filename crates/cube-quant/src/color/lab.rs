//! CIE LAB color space (D65).
//!
//! LAB separates lightness (L) from the two chroma axes (a, b), which lets
//! the palette matcher penalize lightness mismatch independently of hue.
//! The conversion is the plain sRGB → XYZ → LAB pipeline with the D65
//! reference white; the constants are fixed for output compatibility and
//! must not be swapped for another color-difference formulation.

use super::rgb::Rgb;

/// D65 reference white.
const XN: f32 = 0.95047;
const YN: f32 = 1.0;
const ZN: f32 = 1.08883;

/// CIE LAB threshold between the cube-root and linear segments.
const LAB_EPSILON: f32 = 0.008856;

/// A color in CIE LAB space.
///
/// - `l`: lightness, nominally 0.0 (black) to 100.0 (white)
/// - `a`: green-red axis
/// - `b`: blue-yellow axis
///
/// Values are derived from [`Rgb`] on demand and never cached on pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a LAB color from raw components.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// sRGB transfer function: gamma-encoded channel (0..=1) to linear light.
#[inline]
fn linearize(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// LAB nonlinearity with the standard linear segment below the threshold.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert an RGB color to LAB via sRGB linearization and the D65 XYZ
    /// matrix.
    ///
    /// Total for all float inputs: channels are clamped to 0..=255 first, so
    /// out-of-range working values produced by error diffusion convert
    /// without surprises.
    fn from(rgb: Rgb) -> Self {
        let rgb = rgb.clamped();
        let rl = linearize(rgb.r / 255.0);
        let gl = linearize(rgb.g / 255.0);
        let bl = linearize(rgb.b / 255.0);

        // sRGB to XYZ (D65)
        let x = rl * 0.4124564 + gl * 0.3575761 + bl * 0.1804375;
        let y = rl * 0.2126729 + gl * 0.7151522 + bl * 0.0721750;
        let z = rl * 0.0193339 + gl * 0.1191920 + bl * 0.9503041;

        let fx = lab_f(x / XN);
        let fy = lab_f(y / YN);
        let fz = lab_f(z / ZN);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
