//! Color types and conversion utilities.
//!
//! Two types flow through the quantization pipeline:
//!
//! - **[`Rgb`]**: a float RGB triple on the 0..=255 scale. Float channels let
//!   the working buffer carry sub-unit diffusion error between pixels.
//! - **[`Lab`]**: CIE LAB (D65), derived from [`Rgb`] on demand. Used solely
//!   to weight lightness differently from chroma during palette matching.
//!
//! # Example
//!
//! ```
//! use cube_quant::{Lab, Rgb};
//!
//! let white = Rgb::from_u8(255, 255, 255);
//! let lab = Lab::from(white);
//! assert!((lab.l - 100.0).abs() < 1e-2);
//! ```

mod lab;
mod rgb;

pub use lab::Lab;
pub use rgb::Rgb;
