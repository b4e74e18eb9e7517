//! Export artifacts: mosaic PNG, cube build table, per-cube PNG archive.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use cube_quant::{compose, CubeRecord, IndexRaster, Palette};

use crate::error::AppError;

/// Write the mosaic as an indexed-color PNG.
///
/// Each sticker becomes a `sticker_px` square block. The palette goes into
/// the PLTE chunk and indices are packed at the smallest bit depth that
/// holds the palette.
pub fn write_mosaic_png(
    path: &Path,
    raster: &IndexRaster,
    palette: &Palette,
    sticker_px: usize,
) -> Result<(), AppError> {
    let expanded = compose::expand(raster, sticker_px);
    let bytes = encode_indexed_png(&expanded, palette)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote mosaic");
    Ok(())
}

/// Write the cube build table as CSV.
pub fn write_table_csv(path: &Path, records: &[CubeRecord]) -> Result<(), AppError> {
    std::fs::write(path, cube_table_csv(records))?;
    tracing::info!(path = %path.display(), cubes = records.len(), "wrote cube table");
    Ok(())
}

/// Write the cube build table as JSON.
pub fn write_table_json(path: &Path, records: &[CubeRecord]) -> Result<(), AppError> {
    std::fs::write(path, cube_table_json(records)?)?;
    tracing::info!(path = %path.display(), cubes = records.len(), "wrote cube table");
    Ok(())
}

/// Write a ZIP archive containing one PNG per cube.
///
/// Entries are named `cube_{x:03}_{y:03}.png`, row-major with `cube_y`
/// outer, matching the order of the build table.
pub fn write_cube_archive(
    path: &Path,
    raster: &IndexRaster,
    palette: &Palette,
    sticker_px: usize,
) -> Result<(), AppError> {
    let cubes_across = raster.width() / 3;
    let cubes_down = raster.height() / 3;
    let side = (3 * sticker_px) as u32;

    let file = File::create(path)?;
    let mut archive = zip::ZipWriter::new(BufWriter::new(file));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for cube_y in 0..cubes_down {
        for cube_x in 0..cubes_across {
            let rgb = compose::render_cube(raster, palette, cube_x, cube_y, sticker_px);
            let png = encode_rgb_png(&rgb, side, side)?;
            archive.start_file(format!("cube_{:03}_{:03}.png", cube_x, cube_y), options)?;
            archive.write_all(&png)?;
        }
    }
    archive.finish()?;
    tracing::info!(
        path = %path.display(),
        cubes = cubes_across * cubes_down,
        "wrote cube archive"
    );
    Ok(())
}

/// Format cube records as CSV with a `cube_x,cube_y,row0,row1,row2` header.
pub fn cube_table_csv(records: &[CubeRecord]) -> String {
    let mut out = String::from("cube_x,cube_y,row0,row1,row2\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            r.cube_x, r.cube_y, r.rows[0], r.rows[1], r.rows[2]
        ));
    }
    out
}

/// Format cube records as pretty-printed JSON.
pub fn cube_table_json(records: &[CubeRecord]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Encode an index raster as an indexed-color PNG (color type 3 with PLTE).
///
/// Bit depth is chosen from palette size: 1 bit up to 2 entries, 2 bits up
/// to 4, 4 bits up to 16, 8 bits beyond.
pub fn encode_indexed_png(raster: &IndexRaster, palette: &Palette) -> Result<Vec<u8>, AppError> {
    let width = raster.width() as u32;
    let height = raster.height() as u32;

    let (depth, bits) = match palette.len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let plte: Vec<u8> = (0..palette.len())
        .flat_map(|i| palette.rgb(i).to_bytes())
        .collect();
    let packed = if bits == 8 {
        raster.indices().to_vec()
    } else {
        pack_nbits(raster.indices(), width, bits)
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(depth);
        encoder.set_palette(plte);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&packed)?;
    }
    Ok(buf.into_inner())
}

/// Encode flat RGB bytes as an 8-bit truecolor PNG.
fn encode_rgb_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgb)?;
    }
    Ok(buf.into_inner())
}

/// Pack 1/2/4-bit indices into PNG scanlines (big-endian within each byte,
/// rows padded to whole bytes).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
