use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cube_quant::{compose, Palette};
use cubemosaic::export;
use cubemosaic::pipeline::{self, PipelineOptions};

#[derive(Parser)]
#[command(name = "cubemosaic")]
#[command(about = "Turn an image into a puzzle-cube sticker mosaic")]
struct Cli {
    /// Input image (any format the image crate can decode)
    input: PathBuf,

    /// Output mosaic PNG path
    #[arg(short, long, default_value = "mosaic.png")]
    output: PathBuf,

    /// Write a cube build table to this path
    #[arg(long)]
    table: Option<PathBuf>,

    /// Build table format
    #[arg(long, value_enum, default_value_t = TableFormat::Csv)]
    table_format: TableFormat,

    /// Write a ZIP archive of per-cube PNGs to this path
    #[arg(long)]
    cube_archive: Option<PathBuf>,

    /// Mosaic width in cubes (3 stickers each)
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    cubes_across: u32,

    /// Rendered sticker size in pixels
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    sticker_px: u32,

    /// Gaussian blur sigma applied at sticker resolution (0 disables)
    #[arg(long, default_value_t = 0.0)]
    blur_sigma: f32,

    /// Lightness weight for palette matching
    #[arg(long, default_value_t = cube_quant::DEFAULT_LUM_WEIGHT)]
    lum_weight: f32,

    /// Custom palette as comma-separated KEY:#RRGGBB entries
    /// (e.g. "W:#FFFFFF,Y:#FFD500,R:#AA101F"); defaults to the six
    /// standard cube sticker colors
    #[arg(long)]
    palette: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableFormat {
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubemosaic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let palette = match &cli.palette {
        Some(spec) => spec.parse::<Palette>()?,
        None => Palette::cube_classic(),
    };

    let options = PipelineOptions {
        cubes_across: cli.cubes_across as usize,
        sticker_px: cli.sticker_px as usize,
        blur_sigma: cli.blur_sigma,
        lum_weight: cli.lum_weight,
    };
    let result = pipeline::run(&cli.input, &palette, &options)?;

    export::write_mosaic_png(&cli.output, &result.raster, &palette, result.plan.sticker_px)?;

    if let Some(table_path) = &cli.table {
        let records = compose::cube_table(&result.raster, &palette);
        match cli.table_format {
            TableFormat::Csv => export::write_table_csv(table_path, &records)?,
            TableFormat::Json => export::write_table_json(table_path, &records)?,
        }
    }

    if let Some(archive_path) = &cli.cube_archive {
        export::write_cube_archive(
            archive_path,
            &result.raster,
            &palette,
            result.plan.sticker_px,
        )?;
    }

    println!(
        "Rendered {} ({}x{} cubes, {}x{} stickers)",
        cli.output.display(),
        result.plan.cubes_across,
        result.plan.cubes_down,
        result.plan.stickers_across,
        result.plan.stickers_high,
    );

    Ok(())
}
