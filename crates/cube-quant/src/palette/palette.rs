//! Palette struct with precomputed LAB entries and weighted nearest matching.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Lab, Rgb};

/// An ordered, keyed color palette.
///
/// Each entry pairs a single-character key with a color. The key is what
/// appears in build tables and sticker listings; the index is what appears
/// in quantized rasters. Entry order is significant: when two entries are
/// exactly equidistant from an input color, the lower index wins, so entry
/// order is part of the output contract.
///
/// # Precomputation
///
/// LAB conversions are done once at construction time. Palette colors never
/// change afterwards, so per-pixel matching is a plain linear scan over
/// precomputed values.
///
/// # Example
///
/// ```
/// use cube_quant::{Palette, Rgb};
///
/// let palette = Palette::new(&[
///     ('K', Rgb::from_u8(0, 0, 0)),
///     ('W', Rgb::from_u8(255, 255, 255)),
/// ]).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.key(1), 'W');
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    keys: Vec<char>,
    rgb: Vec<Rgb>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a palette from `(key, color)` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `entries` is empty ([`PaletteError::Empty`])
    /// - a key appears more than once ([`PaletteError::DuplicateKey`])
    ///
    /// # Example
    ///
    /// ```
    /// use cube_quant::{Palette, PaletteError, Rgb};
    ///
    /// let result = Palette::new(&[
    ///     ('R', Rgb::from_u8(170, 16, 31)),
    ///     ('R', Rgb::from_u8(255, 0, 0)),
    /// ]);
    /// assert!(matches!(result, Err(PaletteError::DuplicateKey { key: 'R', index: 1 })));
    /// ```
    pub fn new(entries: &[(char, Rgb)]) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut seen = HashSet::new();
        for (i, &(key, _)) in entries.iter().enumerate() {
            if !seen.insert(key) {
                return Err(PaletteError::DuplicateKey { key, index: i });
            }
        }

        let keys: Vec<char> = entries.iter().map(|&(k, _)| k).collect();
        let rgb: Vec<Rgb> = entries.iter().map(|&(_, c)| c).collect();
        let lab: Vec<Lab> = rgb.iter().map(|&c| Lab::from(c)).collect();

        Ok(Self { keys, rgb, lab })
    }

    /// Create a palette from `(key, hex string)` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use cube_quant::Palette;
    ///
    /// let palette = Palette::from_hex(&[('K', "#000"), ('W', "#FFFFFF")]).unwrap();
    /// assert_eq!(palette.rgb(1).to_bytes(), [255, 255, 255]);
    /// ```
    pub fn from_hex(entries: &[(char, &str)]) -> Result<Self, PaletteError> {
        let parsed: Vec<(char, Rgb)> = entries
            .iter()
            .map(|&(key, hex)| Ok((key, Rgb::from_str(hex)?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Palette::new(&parsed)
    }

    /// The six sticker colors of a standard speed cube.
    ///
    /// White, yellow, red, orange, blue, green, keyed by initial. These are
    /// the common sticker pigments rather than pure screen primaries, so
    /// matched mosaics come out close to what the assembled cubes look like.
    pub fn cube_classic() -> Self {
        Self::new(&[
            ('W', Rgb::from_u8(255, 255, 255)),
            ('Y', Rgb::from_u8(255, 213, 0)),
            ('R', Rgb::from_u8(170, 16, 31)),
            ('O', Rgb::from_u8(255, 88, 0)),
            ('B', Rgb::from_u8(0, 70, 173)),
            ('G', Rgb::from_u8(0, 155, 72)),
        ])
        .expect("classic palette entries are non-empty with unique keys")
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are rejected
    /// at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get the key character at the given index.
    #[inline]
    pub fn key(&self, idx: usize) -> char {
        self.keys[idx]
    }

    /// All keys in palette order.
    #[inline]
    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    /// Get the color at the given index.
    #[inline]
    pub fn rgb(&self, idx: usize) -> Rgb {
        self.rgb[idx]
    }

    /// Get the precomputed LAB value at the given index.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.lab[idx]
    }

    /// Find the nearest palette entry to the given LAB color.
    ///
    /// Distance is squared Euclidean in LAB with the lightness axis scaled
    /// by `lum_weight` before squaring:
    ///
    /// `(lum_weight * dL)^2 + da^2 + db^2`
    ///
    /// Weights above 1.0 favor matching lightness over hue, which keeps
    /// dithered gradients smooth at the cost of some hue accuracy.
    ///
    /// Returns `(index, distance)`. Ties go to the lower index.
    ///
    /// # Example
    ///
    /// ```
    /// use cube_quant::{Lab, Palette, Rgb};
    ///
    /// let palette = Palette::cube_classic();
    /// let (idx, _) = palette.find_nearest(Lab::from(Rgb::from_u8(250, 250, 250)), 2.2);
    /// assert_eq!(palette.key(idx), 'W');
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Lab, lum_weight: f32) -> (usize, f32) {
        // Linear scan - optimal for small palettes (6 colors typical)
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, entry) in self.lab.iter().enumerate() {
            let dl = (entry.l - color.l) * lum_weight;
            let da = entry.a - color.a;
            let db = entry.b - color.b;
            let dist = dl * dl + da * da + db * db;
            // Strict less-than: equidistant entries keep the lower index.
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse a palette from a spec string of the form
    /// `W:#FFFFFF,Y:#FFD500,R:#AA101F`.
    ///
    /// Entries are comma-separated; each entry is a single-character key,
    /// a colon, and a hex color. Whitespace around entries is trimmed.
    ///
    /// # Example
    ///
    /// ```
    /// use cube_quant::Palette;
    ///
    /// let palette: Palette = "K:#000000, W:#FFFFFF".parse().unwrap();
    /// assert_eq!(palette.keys(), &['K', 'W']);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, hex) = part
                .split_once(':')
                .ok_or_else(|| PaletteError::MalformedEntry(part.to_string()))?;
            let key = key.trim();
            let mut chars = key.chars();
            let key_char = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(PaletteError::MalformedEntry(part.to_string())),
            };
            entries.push((key_char, Rgb::from_str(hex.trim())?));
        }
        Palette::new(&entries)
    }
}
