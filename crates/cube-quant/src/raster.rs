//! Indexed raster output type.

use crate::palette::Palette;

/// A grid of palette indices, one `u8` per cell, in row-major order.
///
/// This is the canonical output of quantization and the input to grid
/// composition. The indexed form is authoritative; RGB expansion is
/// computed on demand by looking up palette colors.
///
/// # Example
///
/// ```
/// use cube_quant::IndexRaster;
///
/// // 2x2 checkerboard
/// let raster = IndexRaster::new(vec![0, 1, 1, 0], 2, 2);
/// assert_eq!(raster.index(1, 0), 1);
/// assert_eq!(raster.indices(), &[0, 1, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRaster {
    /// Palette indices, one per cell, row-major order.
    indices: Vec<u8>,
    /// Width in cells.
    width: usize,
    /// Height in cells.
    height: usize,
}

impl IndexRaster {
    /// Create a raster from palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
        }
    }

    /// Returns the palette indices as a slice, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The index at cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        self.indices[y * self.width + x]
    }

    /// Expand to flat RGB bytes (`[R, G, B, R, G, B, ...]`) by looking up
    /// each index in `palette`.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self, palette: &Palette) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let [r, g, b] = palette.rgb(idx as usize).to_bytes();
            rgb.push(r);
            rgb.push(g);
            rgb.push(b);
        }
        rgb
    }
}
