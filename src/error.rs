use thiserror::Error;

/// Errors surfaced by the pipeline and exporters.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to decode input image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("invalid palette: {0}")]
    Palette(#[from] cube_quant::PaletteError),

    #[error("grid planning failed: {0}")]
    Grid(#[from] cube_quant::GridError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("table serialization error: {0}")]
    Table(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
