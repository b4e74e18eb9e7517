//! Keyed color palettes and nearest-color matching.
//!
//! A [`Palette`] is an ordered list of `(key, color)` entries, where the key
//! is a single character used in textual build tables (`W` for white, `R`
//! for red, and so on). LAB representations are precomputed at construction
//! so per-pixel matching never converts palette entries.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
