//! cube-quant: palette quantization for puzzle-cube sticker mosaics
//!
//! This library turns a continuous-tone image into a mosaic of puzzle-cube
//! stickers: a small fixed palette, perceptually weighted matching, and
//! error diffusion tuned for very low output resolutions (a sticker is one
//! "pixel", and a typical mosaic is under 100 stickers across).
//!
//! # Quick Start
//!
//! ```
//! use cube_quant::{compose, quantize, GridPlan, Palette, QuantizeOptions, Rgb};
//!
//! let palette = Palette::cube_classic();
//! let plan = GridPlan::plan(100, 50, 4, 16).unwrap();
//!
//! // Source pixels already resampled to sticker resolution.
//! let pixels = vec![Rgb::from_u8(170, 16, 31); plan.sticker_count()];
//! let raster = quantize(
//!     &pixels,
//!     plan.stickers_across,
//!     plan.stickers_high,
//!     &palette,
//!     &QuantizeOptions::default(),
//! );
//!
//! let table = compose::cube_table(&raster, &palette);
//! assert_eq!(table.len(), plan.cube_count());
//! assert_eq!(table[0].rows, ["RRR", "RRR", "RRR"]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! source image (any size, float sRGB 0..=255)
//!     |
//!     v
//! GridPlan::plan          (sticker grid: width from cube count,
//!     |                    height from aspect, whole cubes only)
//!     v
//! preprocess::resample    (area-average to sticker resolution)
//! preprocess::gaussian_blur (optional, sigma > 0)
//!     |
//!     v
//! quantize                (serpentine Floyd-Steinberg over an
//!     |                    unclamped working buffer)
//!     v
//! IndexRaster             (one palette index per sticker)
//!     |
//!     +---> compose::render_mosaic   (RGB preview, block per sticker)
//!     +---> compose::render_cube     (RGB image of one cube)
//!     +---> compose::cube_table      (keys per cube, for build sheets)
//! ```
//!
//! # Color handling
//!
//! Pixels travel as [`Rgb`] with float channels on the 0..=255 scale, so
//! diffusion error accumulates without rounding. Palette matching converts
//! a clamped copy to CIE [`Lab`] (D65) and minimizes
//! `(lum_weight * dL)^2 + da^2 + db^2`; weighting lightness above chroma
//! keeps gradients smooth on a six-color palette. The working value itself
//! is never clamped, and diffusion error is computed from the unclamped
//! value. That asymmetry is part of the output contract: quantization is
//! deterministic and downstream build tables depend on it bit for bit.

pub mod color;
pub mod compose;
pub mod grid;
pub mod palette;
pub mod preprocess;
pub mod quantize;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use color::{Lab, Rgb};
pub use compose::CubeRecord;
pub use grid::{GridError, GridPlan};
pub use palette::{Palette, PaletteError, ParseColorError};
pub use quantize::{quantize, QuantizeOptions, DEFAULT_LUM_WEIGHT};
pub use raster::IndexRaster;
