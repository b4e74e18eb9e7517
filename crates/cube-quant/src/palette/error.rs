//! Error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation and palette-spec parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No entries provided
    #[error("palette cannot be empty")]
    Empty,
    /// The same key appears more than once
    #[error("duplicate palette key '{key}' at index {index}")]
    DuplicateKey {
        /// Key that was already present
        key: char,
        /// Index of the second occurrence
        index: usize,
    },
    /// A palette-spec entry is not of the form `K:#RRGGBB`
    #[error("malformed palette entry '{0}' (expected KEY:#RRGGBB)")]
    MalformedEntry(String),
    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
