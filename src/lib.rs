//! cubemosaic: turn images into puzzle-cube sticker mosaics.
//!
//! The heavy lifting (color conversion, palette matching, error diffusion,
//! grid planning, composition) lives in the `cube-quant` crate; this crate
//! adds image decode, the CLI, and the export artifacts a builder actually
//! uses: a mosaic preview PNG, a cube-by-cube build table, and an optional
//! ZIP of per-cube images.

pub mod error;
pub mod export;
pub mod pipeline;

pub use error::AppError;
pub use pipeline::{MosaicResult, PipelineOptions};
