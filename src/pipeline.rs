//! The image-to-mosaic pipeline.
//!
//! Decode, plan, preprocess, quantize. All parameters are explicit and every
//! stage returns its result; there is no process-wide state, so a single
//! process can run several conversions with different settings.

use std::path::Path;

use image::RgbImage;

use cube_quant::preprocess::{gaussian_blur, resample};
use cube_quant::{quantize, GridPlan, IndexRaster, Palette, QuantizeOptions, Rgb};

use crate::error::AppError;

/// Tunable pipeline parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    /// Mosaic width in cubes
    pub cubes_across: usize,
    /// Rendered sticker size in pixels
    pub sticker_px: usize,
    /// Gaussian blur sigma at sticker resolution; 0 disables
    pub blur_sigma: f32,
    /// Lightness weight for palette matching
    pub lum_weight: f32,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            cubes_across: 16,
            sticker_px: 16,
            blur_sigma: 0.0,
            lum_weight: cube_quant::DEFAULT_LUM_WEIGHT,
        }
    }
}

/// Output of a pipeline run: the quantized sticker raster and the grid it
/// was planned on.
#[derive(Debug, Clone)]
pub struct MosaicResult {
    /// One palette index per sticker
    pub raster: IndexRaster,
    /// The planned grid (sticker counts, cube counts, sticker size)
    pub plan: GridPlan,
}

/// Decode an image file and convert it to a sticker mosaic.
pub fn run(
    input: &Path,
    palette: &Palette,
    options: &PipelineOptions,
) -> Result<MosaicResult, AppError> {
    tracing::debug!(input = %input.display(), "decoding input image");
    let img = image::open(input)?.to_rgb8();
    process(&img, palette, options)
}

/// Convert an in-memory image to a sticker mosaic.
pub fn process(
    img: &RgbImage,
    palette: &Palette,
    options: &PipelineOptions,
) -> Result<MosaicResult, AppError> {
    let (src_w, src_h) = img.dimensions();
    let plan = GridPlan::plan(src_w, src_h, options.cubes_across, options.sticker_px)?;
    tracing::info!(
        source_width = src_w,
        source_height = src_h,
        stickers_across = plan.stickers_across,
        stickers_high = plan.stickers_high,
        cubes_across = plan.cubes_across,
        cubes_down = plan.cubes_down,
        "planned mosaic grid"
    );

    let pixels: Vec<Rgb> = img
        .pixels()
        .map(|p| Rgb::from_u8(p[0], p[1], p[2]))
        .collect();

    let small = resample(
        &pixels,
        src_w as usize,
        src_h as usize,
        plan.stickers_across,
        plan.stickers_high,
    );
    let blurred = gaussian_blur(
        &small,
        plan.stickers_across,
        plan.stickers_high,
        options.blur_sigma,
    );

    let raster = quantize(
        &blurred,
        plan.stickers_across,
        plan.stickers_high,
        palette,
        &QuantizeOptions {
            lum_weight: options.lum_weight,
        },
    );
    tracing::debug!(stickers = raster.indices().len(), "quantized");

    Ok(MosaicResult { raster, plan })
}
