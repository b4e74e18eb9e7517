//! Sticker grid planning.
//!
//! A mosaic is built from 3x3-sticker cubes, so the sticker grid must be a
//! multiple of 3 in both directions. Width is fixed by the cube count; the
//! height is derived from the source image's aspect ratio and then rounded
//! up to the next full cube row.

use thiserror::Error;

/// Error type for grid planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Source image has a zero dimension
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    EmptyImage {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },
    /// Zero cubes requested
    #[error("cubes_across must be at least 1")]
    ZeroCubes,
    /// Zero sticker size requested
    #[error("sticker_px must be at least 1")]
    ZeroStickerSize,
}

/// Dimensions of a planned mosaic.
///
/// `stickers_across` is always `cubes_across * 3` and `stickers_high` is
/// always `cubes_down * 3`; the quantizer runs at sticker resolution and
/// the renderer expands each sticker to a `sticker_px` square.
///
/// # Example
///
/// ```
/// use cube_quant::GridPlan;
///
/// let plan = GridPlan::plan(100, 50, 4, 16).unwrap();
/// assert_eq!(plan.stickers_across, 12);
/// assert_eq!(plan.stickers_high, 6);
/// assert_eq!(plan.cubes_down, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    /// Sticker columns (`cubes_across * 3`)
    pub stickers_across: usize,
    /// Sticker rows (`cubes_down * 3`)
    pub stickers_high: usize,
    /// Cube columns
    pub cubes_across: usize,
    /// Cube rows
    pub cubes_down: usize,
    /// Rendered sticker size in pixels
    pub sticker_px: usize,
}

impl GridPlan {
    /// Plan a sticker grid for an image.
    ///
    /// The raw sticker height is
    /// `round(stickers_across * image_height / image_width)` computed in
    /// `f64` (`f64::round`, half away from zero), then rounded up to the
    /// next multiple of 3 so the grid always holds whole cubes. An exact
    /// multiple of 3 is left unchanged. Rounding up rather than to nearest
    /// means the mosaic never crops below the aspect-derived height.
    ///
    /// # Errors
    ///
    /// Fails fast on a zero-dimension image, zero `cubes_across`, or zero
    /// `sticker_px`. Callers are expected to validate first; this is the
    /// backstop.
    pub fn plan(
        image_width: u32,
        image_height: u32,
        cubes_across: usize,
        sticker_px: usize,
    ) -> Result<Self, GridError> {
        if image_width == 0 || image_height == 0 {
            return Err(GridError::EmptyImage {
                width: image_width,
                height: image_height,
            });
        }
        if cubes_across == 0 {
            return Err(GridError::ZeroCubes);
        }
        if sticker_px == 0 {
            return Err(GridError::ZeroStickerSize);
        }

        let stickers_across = cubes_across * 3;
        let raw_high =
            (stickers_across as f64 * image_height as f64 / image_width as f64).round() as usize;
        // At least one cube row, even for extreme landscape ratios.
        let stickers_high = match raw_high % 3 {
            0 => raw_high.max(3),
            rem => raw_high + (3 - rem),
        };
        let cubes_down = stickers_high / 3;

        Ok(Self {
            stickers_across,
            stickers_high,
            cubes_across,
            cubes_down,
            sticker_px,
        })
    }

    /// Total sticker count.
    #[inline]
    pub fn sticker_count(&self) -> usize {
        self.stickers_across * self.stickers_high
    }

    /// Total cube count.
    #[inline]
    pub fn cube_count(&self) -> usize {
        self.cubes_across * self.cubes_down
    }

    /// Rendered mosaic size in pixels, `(width, height)`.
    #[inline]
    pub fn render_size(&self) -> (usize, usize) {
        (
            self.stickers_across * self.sticker_px,
            self.stickers_high * self.sticker_px,
        )
    }
}
