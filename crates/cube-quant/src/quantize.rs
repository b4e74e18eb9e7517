//! Palette quantization with serpentine Floyd-Steinberg error diffusion.
//!
//! The quantizer maps every pixel of a float RGB image to its nearest
//! palette entry in weighted LAB space, then diffuses the quantization
//! error to unprocessed neighbors so that a six-color palette can still
//! render smooth gradients at sticker resolution.
//!
//! # Algorithm
//!
//! Rows are scanned in serpentine (boustrophedon) order: even rows left to
//! right, odd rows right to left, with the diffusion kernel mirrored
//! horizontally on reverse rows. Serpentine scanning breaks up the
//! diagonal "worm" artifacts that a fixed scan direction produces on
//! low-resolution output.
//!
//! # Working buffer semantics
//!
//! Diffused error accumulates in an unclamped float working buffer;
//! channels are clamped to 0..=255 only on the copy converted to LAB for
//! matching. The error diffused onward is computed from the *unclamped*
//! working value, so no error mass is lost at saturated regions. Changing
//! this changes visual output.

use crate::color::{Lab, Rgb};
use crate::palette::Palette;
use crate::raster::IndexRaster;

/// Default lightness weight for palette matching.
///
/// Chosen so that dithered gradients stay smooth with the standard
/// six-color sticker palette; see [`Palette::find_nearest`].
pub const DEFAULT_LUM_WEIGHT: f32 = 2.2;

/// Floyd-Steinberg diffusion taps as `(dx, dy, weight)`.
///
/// Weights sum to 1.0 (full error propagation). `dx` is mirrored on
/// serpentine reverse rows.
const FLOYD_STEINBERG: [(i32, i32, f32); 4] = [
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Quantization configuration.
///
/// # Example
///
/// ```
/// use cube_quant::QuantizeOptions;
///
/// let options = QuantizeOptions::default();
/// assert_eq!(options.lum_weight, 2.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizeOptions {
    /// Lightness weight for palette matching. Values above 1.0 favor
    /// matching lightness over hue.
    pub lum_weight: f32,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            lum_weight: DEFAULT_LUM_WEIGHT,
        }
    }
}

/// Quantize an image to palette indices with error diffusion.
///
/// # Arguments
///
/// * `pixels` - Input pixels on the 0..=255 float scale, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `palette` - Palette to match against
/// * `options` - Matching configuration
///
/// # Panics (debug only)
///
/// Debug-asserts that `pixels.len() == width * height`.
///
/// # Example
///
/// ```
/// use cube_quant::{quantize, Palette, QuantizeOptions, Rgb};
///
/// let palette = Palette::cube_classic();
/// let pixels = vec![Rgb::from_u8(250, 250, 250); 4];
/// let raster = quantize(&pixels, 2, 2, &palette, &QuantizeOptions::default());
/// assert!(raster.indices().iter().all(|&i| palette.key(i as usize) == 'W'));
/// ```
pub fn quantize(
    pixels: &[Rgb],
    width: usize,
    height: usize,
    palette: &Palette,
    options: &QuantizeOptions,
) -> IndexRaster {
    debug_assert_eq!(
        pixels.len(),
        width * height,
        "pixel count ({}) must match width * height ({}x{}={})",
        pixels.len(),
        width,
        height,
        width * height,
    );

    let mut working: Vec<Rgb> = pixels.to_vec();
    let mut indices = vec![0u8; width * height];

    for y in 0..height {
        let reverse = y % 2 == 1;

        let x_range: Box<dyn Iterator<Item = usize>> = if reverse {
            Box::new((0..width).rev())
        } else {
            Box::new(0..width)
        };

        for x in x_range {
            let idx = y * width + x;
            let value = working[idx];

            // LAB conversion clamps its own copy; `value` stays unclamped.
            let (nearest, _dist) = palette.find_nearest(Lab::from(value), options.lum_weight);
            indices[idx] = nearest as u8;

            // Error from the unclamped working value, not the matched copy.
            let target = palette.rgb(nearest);
            let error = Rgb::new(value.r - target.r, value.g - target.g, value.b - target.b);
            diffuse(&mut working, width, height, x, y, reverse, error);
        }
    }

    IndexRaster::new(indices, width, height)
}

/// Distribute quantization error to the Floyd-Steinberg neighbors of
/// `(x, y)`, mirroring `dx` when the row runs right to left. Taps landing
/// outside the image are dropped.
fn diffuse(
    working: &mut [Rgb],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    reverse: bool,
    error: Rgb,
) {
    for &(dx, dy, weight) in &FLOYD_STEINBERG {
        let effective_dx = if reverse { -dx } else { dx };
        let nx = x as i32 + effective_dx;
        let ny = y + dy as usize;

        if nx >= 0 && (nx as usize) < width && ny < height {
            let n = ny * width + nx as usize;
            working[n].r += error.r * weight;
            working[n].g += error.g * weight;
            working[n].b += error.b * weight;
        }
    }
}
