//! Mosaic composition: expanded rasters, per-cube views, and build tables.
//!
//! The quantizer's output is one index per sticker. Composition turns that
//! into the artifacts a builder needs: a rendered mosaic where each sticker
//! is a uniform square block, a rendered image per cube, and a textual
//! table listing each cube's 3x3 sticker keys row by row.

use serde::Serialize;

use crate::palette::Palette;
use crate::raster::IndexRaster;

/// One cube's worth of sticker keys.
///
/// `rows` holds the three sticker rows top to bottom, each a three-key
/// string (e.g. `"WRB"`). Cube coordinates are zero-based, `(0, 0)` at the
/// top left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CubeRecord {
    /// Cube column, zero-based from the left
    pub cube_x: usize,
    /// Cube row, zero-based from the top
    pub cube_y: usize,
    /// Sticker keys, top row first
    pub rows: [String; 3],
}

/// Expand a sticker raster so each sticker covers a `sticker_px` square.
///
/// The result is still an index raster; use [`IndexRaster::to_rgb`] or the
/// render functions below for RGB output.
///
/// # Example
///
/// ```
/// use cube_quant::{compose, IndexRaster};
///
/// let raster = IndexRaster::new(vec![0, 1], 2, 1);
/// let big = compose::expand(&raster, 2);
/// assert_eq!(big.indices(), &[0, 0, 1, 1, 0, 0, 1, 1]);
/// ```
pub fn expand(raster: &IndexRaster, sticker_px: usize) -> IndexRaster {
    let out_w = raster.width() * sticker_px;
    let out_h = raster.height() * sticker_px;
    let mut indices = vec![0u8; out_w * out_h];

    for sy in 0..raster.height() {
        for sx in 0..raster.width() {
            let idx = raster.index(sx, sy);
            for py in 0..sticker_px {
                let row_base = (sy * sticker_px + py) * out_w + sx * sticker_px;
                indices[row_base..row_base + sticker_px].fill(idx);
            }
        }
    }

    IndexRaster::new(indices, out_w, out_h)
}

/// Render the whole mosaic to flat RGB bytes.
///
/// Each sticker becomes a uniform `sticker_px` square; the buffer is
/// `(width * sticker_px) * (height * sticker_px) * 3` bytes in
/// `[R, G, B, ...]` layout.
pub fn render_mosaic(raster: &IndexRaster, palette: &Palette, sticker_px: usize) -> Vec<u8> {
    expand(raster, sticker_px).to_rgb(palette)
}

/// Render a single cube (a 3x3 sticker block) to flat RGB bytes.
///
/// The buffer is `(3 * sticker_px)^2 * 3` bytes.
///
/// # Panics
///
/// Panics if the cube coordinates fall outside the raster or the raster
/// dimensions are not multiples of 3.
pub fn render_cube(
    raster: &IndexRaster,
    palette: &Palette,
    cube_x: usize,
    cube_y: usize,
    sticker_px: usize,
) -> Vec<u8> {
    let cube = cube_raster(raster, cube_x, cube_y);
    expand(&cube, sticker_px).to_rgb(palette)
}

/// List every cube's sticker keys, row-major with `cube_y` outer.
///
/// # Panics
///
/// Panics if the raster dimensions are not multiples of 3.
///
/// # Example
///
/// ```
/// use cube_quant::{compose, IndexRaster, Palette};
///
/// let palette = Palette::cube_classic();
/// // One cube of solid red (index 2 in the classic palette).
/// let raster = IndexRaster::new(vec![2; 9], 3, 3);
/// let table = compose::cube_table(&raster, &palette);
/// assert_eq!(table.len(), 1);
/// assert_eq!(table[0].rows, ["RRR", "RRR", "RRR"]);
/// ```
pub fn cube_table(raster: &IndexRaster, palette: &Palette) -> Vec<CubeRecord> {
    assert!(
        raster.width() % 3 == 0 && raster.height() % 3 == 0,
        "raster dimensions must be multiples of 3 (got {}x{})",
        raster.width(),
        raster.height(),
    );
    let cubes_across = raster.width() / 3;
    let cubes_down = raster.height() / 3;

    let mut records = Vec::with_capacity(cubes_across * cubes_down);
    for cube_y in 0..cubes_down {
        for cube_x in 0..cubes_across {
            let rows = std::array::from_fn(|ry| {
                (0..3)
                    .map(|rx| palette.key(raster.index(cube_x * 3 + rx, cube_y * 3 + ry) as usize))
                    .collect()
            });
            records.push(CubeRecord {
                cube_x,
                cube_y,
                rows,
            });
        }
    }
    records
}

/// Cut one cube's 3x3 sticker block out of the raster.
fn cube_raster(raster: &IndexRaster, cube_x: usize, cube_y: usize) -> IndexRaster {
    assert!(
        raster.width() % 3 == 0 && raster.height() % 3 == 0,
        "raster dimensions must be multiples of 3 (got {}x{})",
        raster.width(),
        raster.height(),
    );
    assert!(
        cube_x < raster.width() / 3 && cube_y < raster.height() / 3,
        "cube ({}, {}) out of range",
        cube_x,
        cube_y,
    );

    let mut indices = Vec::with_capacity(9);
    for ry in 0..3 {
        for rx in 0..3 {
            indices.push(raster.index(cube_x * 3 + rx, cube_y * 3 + ry));
        }
    }
    IndexRaster::new(indices, 3, 3)
}
